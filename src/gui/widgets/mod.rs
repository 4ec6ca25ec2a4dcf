use iced::{
    Alignment::Center,
    Background, Color, Element, Length, Theme, border,
    widget::{button, column, container, row, scrollable, space, stack, text},
};
use iced_widget::container::bordered_box;

use crate::core::route::{Role, Route};
use crate::core::store::{ComplaintStatus, ProgressBand, ProjectStatus};
use crate::gui::state::Toast;

/// Accent tone shared by badges, stat cards and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Success,
    Muted,
    Critical,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Info => Color::from_rgb8(37, 99, 235),
            Tone::Warning => Color::from_rgb8(217, 119, 6),
            Tone::Success => Color::from_rgb8(22, 163, 74),
            Tone::Muted => Color::from_rgb8(100, 116, 139),
            Tone::Critical => Color::from_rgb8(220, 38, 38),
        }
    }
}

impl From<ProjectStatus> for Tone {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::OnTrack => Tone::Info,
            ProjectStatus::Delayed => Tone::Warning,
            ProjectStatus::Completed => Tone::Success,
        }
    }
}

impl From<ComplaintStatus> for Tone {
    fn from(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Submitted => Tone::Muted,
            ComplaintStatus::UnderReview => Tone::Warning,
            ComplaintStatus::Assigned => Tone::Info,
            ComplaintStatus::Resolved => Tone::Success,
        }
    }
}

impl From<ProgressBand> for Tone {
    fn from(band: ProgressBand) -> Self {
        match band {
            ProgressBand::Success => Tone::Success,
            ProgressBand::Info => Tone::Info,
            ProgressBand::Warning => Tone::Warning,
            ProgressBand::Critical => Tone::Critical,
        }
    }
}

pub fn muted_text_color() -> Color {
    Tone::Muted.color()
}

/// Rounded bordered container, the base of every card-like block.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> iced::widget::Container<'a, M> {
    container(content).padding(16).style(|theme: &Theme| {
        let style = bordered_box(theme);
        iced_widget::container::Style {
            border: style.border.rounded(10.0),
            ..style
        }
    })
}

/// Pill-shaped status label tinted by tone.
pub fn status_badge<'a, M: 'a>(label: &'a str, tone: Tone) -> Element<'a, M> {
    let color = tone.color();
    container(text(label).size(12).color(color))
        .padding([2.0, 8.0])
        .style(move |theme: &Theme| {
            bordered_box(theme)
                .border(border::rounded(9.0).width(1.0).color(color))
                .background(Color { a: 0.08, ..color })
        })
        .into()
}

/// Horizontal completion bar. The stored value is clamped into 0–100 before
/// the width and the color band are derived.
pub fn progress_bar<'a, M: 'a>(value: u8) -> Element<'a, M> {
    let clamped = value.min(100);
    tinted_bar(clamped, Tone::from(ProgressBand::for_progress(clamped)))
}

/// Horizontal bar filled to `percent` in a fixed tone, for share charts.
pub fn tinted_bar<'a, M: 'a>(percent: u8, tone: Tone) -> Element<'a, M> {
    let clamped = percent.min(100);
    let color = tone.color();

    let segment = move |filled: bool| {
        container(space::vertical().height(Length::Fixed(8.0))).style(move |_theme: &Theme| {
            let background = if filled {
                color
            } else {
                Color::from_rgb8(226, 232, 240)
            };
            iced_widget::container::Style::default()
                .background(Background::Color(background))
                .border(border::rounded(4.0))
        })
    };

    match clamped {
        0 => segment(false).width(Length::Fill).into(),
        100 => segment(true).width(Length::Fill).into(),
        _ => row![
            segment(true).width(Length::FillPortion(u16::from(clamped))),
            segment(false).width(Length::FillPortion(u16::from(100 - clamped))),
        ]
        .spacing(2)
        .into(),
    }
}

/// Progress bar with a "{n}% Complete" caption under it.
pub fn labeled_progress_bar<'a, M: 'a>(value: u8) -> Element<'a, M> {
    column![
        progress_bar(value),
        text(format!("{}% Complete", value.min(100)))
            .size(11)
            .color(muted_text_color()),
    ]
    .spacing(4)
    .into()
}

/// Dashboard stat tile: small title, large value, optional subtitle.
pub fn stat_card<'a, M: 'a>(
    title: &'a str,
    value: String,
    subtitle: Option<&'a str>,
    tone: Tone,
) -> Element<'a, M> {
    let mut body = column![
        text(title).size(13).color(muted_text_color()),
        text(value).size(26).color(tone.color()),
    ]
    .spacing(4);
    if let Some(subtitle) = subtitle {
        body = body.push(text(subtitle).size(11).color(muted_text_color()));
    }
    card(body).width(Length::Fill).into()
}

/// The four-stage complaint status stepper. Completed steps get the accent
/// bar, the current step gets the highlighted label.
pub fn status_stepper<'a, M: 'a>(status: ComplaintStatus) -> Element<'a, M> {
    let accent = Tone::Info.color();
    let mut steps = row![].spacing(4);
    for step in status.steps() {
        let bar = container(space::vertical().height(Length::Fixed(5.0)))
            .width(Length::Fill)
            .style(move |_theme: &Theme| {
                let background = if step.completed {
                    accent
                } else {
                    Color::from_rgb8(226, 232, 240)
                };
                iced_widget::container::Style::default()
                    .background(Background::Color(background))
                    .border(border::rounded(2.0))
            });
        let label = if step.current {
            text(step.label).size(11).color(accent)
        } else {
            text(step.label).size(11).color(muted_text_color())
        };
        steps = steps.push(column![bar, label].spacing(3).width(Length::FillPortion(1)));
    }
    steps.into()
}

/// Dashboard chrome: role sidebar on the left, page header and scrollable
/// content on the right.
pub fn layout<'a, M: Clone + 'a>(
    role: Role,
    title: &'a str,
    subtitle: &'a str,
    active: &Route,
    on_nav: impl Fn(Route) -> M + 'a,
    content: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let mut nav = column![].spacing(4);
    for (route, label) in Route::sidebar(role) {
        let style: fn(&Theme, button::Status) -> button::Style = if route == *active {
            button::primary
        } else {
            button::text
        };
        nav = nav.push(
            button(text(label).size(14))
                .width(Length::Fill)
                .style(style)
                .on_press(on_nav(route)),
        );
    }

    let sidebar = container(
        column![
            column![
                text("GovTrack").size(18),
                text(format!("{} Portal", role.label()))
                    .size(12)
                    .color(muted_text_color()),
            ]
            .spacing(2),
            nav,
            space::vertical(),
            button(text("Logout").size(14))
                .width(Length::Fill)
                .style(button::text)
                .on_press(on_nav(Route::Landing)),
        ]
        .spacing(24)
        .padding(16),
    )
    .width(Length::Fixed(220.0))
    .height(Length::Fill)
    .style(|theme: &Theme| bordered_box(theme));

    let mut header = column![text(title).size(24)].spacing(4);
    if !subtitle.is_empty() {
        header = header.push(text(subtitle).size(14).color(muted_text_color()));
    }

    let main = scrollable(
        column![header, content.into()]
            .spacing(20)
            .padding(24)
            .width(Length::Fill),
    );

    row![sidebar, main].into()
}

/// Stack the toast notifications over the page, bottom-right.
pub fn toast_overlay<'a, M: Clone + 'a>(
    content: Element<'a, M>,
    toasts: &'a [Toast],
    on_dismiss: impl Fn(u64) -> M + 'a,
) -> Element<'a, M> {
    if toasts.is_empty() {
        return content;
    }
    let mut list = column![].spacing(8).width(Length::Fixed(320.0));
    for toast in toasts {
        list = list.push(
            card(
                row![
                    column![
                        text(toast.title.clone()).size(14),
                        text(toast.body.clone()).size(12).color(muted_text_color()),
                    ]
                    .spacing(2)
                    .width(Length::Fill),
                    button(text("Dismiss").size(12))
                        .style(button::text)
                        .on_press(on_dismiss(toast.id)),
                ]
                .spacing(8)
                .align_y(Center),
            ),
        );
    }
    stack![
        content,
        container(list)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(16),
    ]
    .into()
}
