//! The route table: a static bidirectional mapping between URL-style paths
//! and typed routes, parameterized by role and optional record id. There is
//! no access check anywhere; any path reaches its view.

/// Which portal a view belongs to. Purely a rendering parameter, not derived
/// from any authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Citizen,
    Contractor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Citizen, Role::Contractor, Role::Admin];

    /// Leading path segment for this role's routes.
    pub fn segment(self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Contractor => "contractor",
            Role::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Citizen => "Citizen",
            Role::Contractor => "Contractor",
            Role::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Every navigable destination in the application.
///
/// Some paths alias onto another route's screen exactly as the original
/// table declares: `/citizen/projects` and `/contractor/projects` render the
/// role dashboard, `/contractor/complaints`, `/admin/contractors` and
/// `/admin/users` render theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login(Role),
    Dashboard(Role),
    Projects(Role),
    ProjectDetails(Role, String),
    /// Admin add-project form.
    NewProject,
    Complaints(Role),
    /// Citizen new-complaint form, optionally preselecting a project.
    NewComplaint(Option<String>),
    /// Contractor progress-update form, optionally preselecting a project.
    Updates(Option<String>),
    Contractors,
    Analytics,
    Users,
    NotFound,
}

impl Route {
    /// Resolve a path. Unknown paths fall through to [`Route::NotFound`];
    /// this is the catch-all of the table, not an error.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["citizen", "login"] => Route::Login(Role::Citizen),
            ["citizen", "dashboard"] => Route::Dashboard(Role::Citizen),
            ["citizen", "projects"] => Route::Projects(Role::Citizen),
            ["citizen", "project", id] => {
                Route::ProjectDetails(Role::Citizen, (*id).to_string())
            }
            ["citizen", "complaints"] => Route::Complaints(Role::Citizen),
            ["citizen", "complaints", "new"] => Route::NewComplaint(None),
            ["contractor", "login"] => Route::Login(Role::Contractor),
            ["contractor", "dashboard"] => Route::Dashboard(Role::Contractor),
            ["contractor", "projects"] => Route::Projects(Role::Contractor),
            ["contractor", "project", id] => {
                Route::ProjectDetails(Role::Contractor, (*id).to_string())
            }
            ["contractor", "updates"] => Route::Updates(None),
            ["contractor", "complaints"] => Route::Complaints(Role::Contractor),
            ["admin", "login"] => Route::Login(Role::Admin),
            ["admin", "dashboard"] => Route::Dashboard(Role::Admin),
            ["admin", "projects"] => Route::Projects(Role::Admin),
            ["admin", "projects", "new"] => Route::NewProject,
            ["admin", "projects", id] => Route::ProjectDetails(Role::Admin, (*id).to_string()),
            ["admin", "contractors"] => Route::Contractors,
            ["admin", "complaints"] => Route::Complaints(Role::Admin),
            ["admin", "analytics"] => Route::Analytics,
            ["admin", "users"] => Route::Users,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login(role) => format!("/{}/login", role.segment()),
            Route::Dashboard(role) => format!("/{}/dashboard", role.segment()),
            Route::Projects(role) => format!("/{}/projects", role.segment()),
            Route::ProjectDetails(Role::Admin, id) => format!("/admin/projects/{id}"),
            Route::ProjectDetails(role, id) => format!("/{}/project/{id}", role.segment()),
            Route::NewProject => "/admin/projects/new".to_string(),
            Route::Complaints(role) => format!("/{}/complaints", role.segment()),
            Route::NewComplaint(_) => "/citizen/complaints/new".to_string(),
            Route::Updates(_) => "/contractor/updates".to_string(),
            Route::Contractors => "/admin/contractors".to_string(),
            Route::Analytics => "/admin/analytics".to_string(),
            Route::Users => "/admin/users".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// The role whose portal this route belongs to, if any.
    pub fn role(&self) -> Option<Role> {
        match self {
            Route::Landing | Route::NotFound => None,
            Route::Login(role)
            | Route::Dashboard(role)
            | Route::Projects(role)
            | Route::ProjectDetails(role, _)
            | Route::Complaints(role) => Some(*role),
            Route::NewProject | Route::Contractors | Route::Analytics | Route::Users => {
                Some(Role::Admin)
            }
            Route::NewComplaint(_) => Some(Role::Citizen),
            Route::Updates(_) => Some(Role::Contractor),
        }
    }

    /// Sidebar navigation entries for one role, in display order.
    pub fn sidebar(role: Role) -> Vec<(Route, &'static str)> {
        match role {
            Role::Citizen => vec![
                (Route::Dashboard(Role::Citizen), "Dashboard"),
                (Route::Projects(Role::Citizen), "All Projects"),
                (Route::Complaints(Role::Citizen), "My Complaints"),
            ],
            Role::Contractor => vec![
                (Route::Dashboard(Role::Contractor), "Dashboard"),
                (Route::Projects(Role::Contractor), "My Projects"),
                (Route::Updates(None), "Submit Updates"),
                (Route::Complaints(Role::Contractor), "Assigned Complaints"),
            ],
            Role::Admin => vec![
                (Route::Dashboard(Role::Admin), "Dashboard"),
                (Route::Projects(Role::Admin), "Manage Projects"),
                (Route::Contractors, "Contractors"),
                (Route::Complaints(Role::Admin), "All Complaints"),
                (Route::Analytics, "Analytics"),
                (Route::Users, "Users"),
            ],
        }
    }
}
