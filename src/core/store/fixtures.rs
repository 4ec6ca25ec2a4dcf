//! The sample dataset every view reads from. Created once at store
//! construction and never mutated; simulated submissions are discarded.

use time::macros::date;

use super::complaint::{Complaint, ComplaintCategory, ComplaintStatus};
use super::contractor::Contractor;
use super::project::{Project, ProjectCategory, ProjectStatus};

/// Citizen identity every citizen-facing page acts as.
pub const DEMO_CITIZEN_ID: &str = "CIT001";

/// Contractor identity every contractor-facing page acts as.
pub const DEMO_CONTRACTOR_ID: &str = "CON001";

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "PRJ001".into(),
            name: "Highway NH-48 Expansion".into(),
            department: "Public Works Department".into(),
            category: ProjectCategory::Road,
            budget: 125_000_000,
            start_date: date!(2024 - 01 - 15),
            end_date: date!(2025 - 06 - 30),
            contractor: "BuildRight Infrastructure".into(),
            contractor_id: "CON001".into(),
            progress: 68,
            status: ProjectStatus::OnTrack,
            description: "Expansion of National Highway 48 from 4 lanes to 6 lanes covering \
                          25 km stretch with modern drainage systems and LED street lighting."
                .into(),
            delay_reason: None,
            images: vec![
                "placeholder.svg".into(),
                "placeholder.svg".into(),
                "placeholder.svg".into(),
            ],
            documents: vec![
                "Project_Plan.pdf".into(),
                "Environmental_Clearance.pdf".into(),
            ],
            location: "Delhi-Gurgaon Sector".into(),
        },
        Project {
            id: "PRJ002".into(),
            name: "Smart Water Grid Installation".into(),
            department: "Water Supply Board".into(),
            category: ProjectCategory::Water,
            budget: 45_000_000,
            start_date: date!(2024 - 03 - 01),
            end_date: date!(2024 - 12 - 31),
            contractor: "AquaTech Solutions".into(),
            contractor_id: "CON002".into(),
            progress: 42,
            status: ProjectStatus::Delayed,
            description: "Installation of smart water meters and automated distribution \
                          system across 15 residential zones."
                .into(),
            delay_reason: Some(
                "Supply chain disruption for smart meters due to import delays".into(),
            ),
            images: vec!["placeholder.svg".into(), "placeholder.svg".into()],
            documents: vec!["Technical_Specs.pdf".into()],
            location: "Central District".into(),
        },
        Project {
            id: "PRJ003".into(),
            name: "Solar Power Grid Phase-2".into(),
            department: "Energy Department".into(),
            category: ProjectCategory::Electricity,
            budget: 89_000_000,
            start_date: date!(2023 - 09 - 01),
            end_date: date!(2024 - 08 - 31),
            contractor: "GreenEnergy Corp".into(),
            contractor_id: "CON003".into(),
            progress: 100,
            status: ProjectStatus::Completed,
            description: "Installation of 50MW solar power capacity with grid integration \
                          and battery storage systems."
                .into(),
            delay_reason: None,
            images: vec![
                "placeholder.svg".into(),
                "placeholder.svg".into(),
                "placeholder.svg".into(),
                "placeholder.svg".into(),
            ],
            documents: vec!["Completion_Report.pdf".into(), "Quality_Audit.pdf".into()],
            location: "Industrial Zone East".into(),
        },
        Project {
            id: "PRJ004".into(),
            name: "District Hospital Upgrade".into(),
            department: "Health Ministry".into(),
            category: ProjectCategory::Health,
            budget: 67_000_000,
            start_date: date!(2024 - 02 - 15),
            end_date: date!(2025 - 02 - 14),
            contractor: "MediBuild Associates".into(),
            contractor_id: "CON001".into(),
            progress: 55,
            status: ProjectStatus::OnTrack,
            description: "Modernization of district hospital including new ICU wing, \
                          diagnostic center, and emergency facilities."
                .into(),
            delay_reason: None,
            images: vec!["placeholder.svg".into(), "placeholder.svg".into()],
            documents: vec!["Architectural_Plan.pdf".into(), "Equipment_List.pdf".into()],
            location: "South District".into(),
        },
        Project {
            id: "PRJ005".into(),
            name: "Underground Cable Network".into(),
            department: "Energy Department".into(),
            category: ProjectCategory::Electricity,
            budget: 34_000_000,
            start_date: date!(2024 - 04 - 01),
            end_date: date!(2024 - 10 - 31),
            contractor: "PowerLine Industries".into(),
            contractor_id: "CON004".into(),
            progress: 78,
            status: ProjectStatus::OnTrack,
            description: "Conversion of overhead power lines to underground cables in \
                          heritage zone covering 8 km."
                .into(),
            delay_reason: None,
            images: vec!["placeholder.svg".into()],
            documents: vec!["Route_Map.pdf".into()],
            location: "Heritage Zone".into(),
        },
        Project {
            id: "PRJ006".into(),
            name: "Ring Road Construction".into(),
            department: "Public Works Department".into(),
            category: ProjectCategory::Road,
            budget: 250_000_000,
            start_date: date!(2023 - 06 - 01),
            end_date: date!(2025 - 12 - 31),
            contractor: "BuildRight Infrastructure".into(),
            contractor_id: "CON001".into(),
            progress: 35,
            status: ProjectStatus::Delayed,
            description: "45 km ring road with 6 interchanges, service roads, and \
                          pedestrian overpasses."
                .into(),
            delay_reason: Some("Land acquisition delays in sector 7 and 8".into()),
            images: vec!["placeholder.svg".into(), "placeholder.svg".into()],
            documents: vec!["Master_Plan.pdf".into(), "Land_Survey.pdf".into()],
            location: "City Periphery".into(),
        },
    ]
}

pub fn sample_contractors() -> Vec<Contractor> {
    vec![
        Contractor {
            id: "CON001".into(),
            name: "BuildRight Infrastructure".into(),
            email: "contact@buildright.com".into(),
            company: "BuildRight Infrastructure Pvt Ltd".into(),
            projects: vec!["PRJ001".into(), "PRJ004".into(), "PRJ006".into()],
            rating: 4.5,
        },
        Contractor {
            id: "CON002".into(),
            name: "AquaTech Solutions".into(),
            email: "info@aquatech.com".into(),
            company: "AquaTech Solutions Ltd".into(),
            projects: vec!["PRJ002".into()],
            rating: 4.2,
        },
        Contractor {
            id: "CON003".into(),
            name: "GreenEnergy Corp".into(),
            email: "support@greenenergy.com".into(),
            company: "GreenEnergy Corporation".into(),
            projects: vec!["PRJ003".into()],
            rating: 4.8,
        },
        Contractor {
            id: "CON004".into(),
            name: "PowerLine Industries".into(),
            email: "contact@powerline.com".into(),
            company: "PowerLine Industries Pvt Ltd".into(),
            projects: vec!["PRJ005".into()],
            rating: 4.0,
        },
    ]
}

pub fn sample_complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "CMP001".into(),
            project_id: "PRJ001".into(),
            project_name: "Highway NH-48 Expansion".into(),
            citizen_id: "CIT001".into(),
            category: ComplaintCategory::RoadIssue,
            description: "The temporary road diversion near sector 5 has too many potholes \
                          causing vehicle damage."
                .into(),
            status: ComplaintStatus::UnderReview,
            created_at: date!(2024 - 11 - 28),
            image: None,
            assigned_to: Some("CON001".into()),
        },
        Complaint {
            id: "CMP002".into(),
            project_id: "PRJ002".into(),
            project_name: "Smart Water Grid Installation".into(),
            citizen_id: "CIT001".into(),
            category: ComplaintCategory::DelayIssue,
            description: "The project deadline has been extended twice. When will our area \
                          get the smart meters?"
                .into(),
            status: ComplaintStatus::Assigned,
            created_at: date!(2024 - 11 - 25),
            image: None,
            assigned_to: Some("CON002".into()),
        },
        Complaint {
            id: "CMP003".into(),
            project_id: "PRJ006".into(),
            project_name: "Ring Road Construction".into(),
            citizen_id: "CIT002".into(),
            category: ComplaintCategory::ServiceProblem,
            description: "Construction noise continues past 10 PM violating noise pollution \
                          norms."
                .into(),
            status: ComplaintStatus::Resolved,
            created_at: date!(2024 - 11 - 20),
            image: None,
            assigned_to: Some("CON001".into()),
        },
        Complaint {
            id: "CMP004".into(),
            project_id: "PRJ004".into(),
            project_name: "District Hospital Upgrade".into(),
            citizen_id: "CIT003".into(),
            category: ComplaintCategory::QualityConcern,
            description: "The newly constructed waiting area has visible cracks on the \
                          ceiling."
                .into(),
            status: ComplaintStatus::Submitted,
            created_at: date!(2024 - 12 - 01),
            image: None,
            assigned_to: None,
        },
    ]
}
