/// Page layouts: listing root, detail skeleton, detail page, not-found page
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{font, Alignment, Color, Element, Font, Length};
use iced_aw::Wrap;

use crate::state::catalog::Catalog;
use crate::state::controller::ViewState;
use crate::state::data::{Project, Tech};
use crate::state::route::Route;
use crate::ui::carousel::Carousel;
use crate::ui::links::LinkPanel;
use crate::Message;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Secondary text (categories, captions)
pub const MUTED: Color = Color {
    r: 0.42,
    g: 0.45,
    b: 0.50,
    a: 1.0,
};

/// Maximum content width, matching a centered page column
const PAGE_WIDTH: f32 = 1200.0;

/// Render the project detail page for the controller's current state
pub fn detail<'a>(state: ViewState<'a>, carousel: Option<&'a Carousel>) -> Element<'a, Message> {
    let content = match state {
        ViewState::Pending => skeleton(),
        ViewState::NotFound => not_found(),
        ViewState::Found(project) => found(project, carousel),
    };
    page(content)
}

/// Listing root: every catalog project, in catalog order
pub fn home<'a>(catalog: &'a Catalog) -> Element<'a, Message> {
    let entries = catalog.iter().map(|project| -> Element<'a, Message> {
        let body = column![
            row![
                text(project.title.as_str()).size(20).font(BOLD),
                text(project.category.as_str()).size(13).color(MUTED),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            text(project.description.as_str()).size(14),
        ]
        .spacing(6);

        button(container(body).width(Length::Fill).padding(8))
            .on_press(Message::Navigate(Route::project_location(&project.slug)))
            .style(button::secondary)
            .width(Length::Fill)
            .into()
    });

    page(
        column![
            text("Projects").size(36).font(BOLD),
            Column::with_children(entries).spacing(12),
        ]
        .spacing(24)
        .into(),
    )
}

/// Placeholder blocks shown while the navigation parameter is unknown
fn skeleton<'a>() -> Element<'a, Message> {
    column![
        block(Length::FillPortion(1), 32.0),
        block(Length::Fill, 256.0),
        block(Length::Fill, 16.0),
        block(Length::FillPortion(5), 16.0),
        row![block(Length::Fill, 128.0), block(Length::Fill, 128.0)].spacing(24),
    ]
    .spacing(16)
    .width(Length::Fill)
    .into()
}

fn block<'a>(width: Length, height: f32) -> Element<'a, Message> {
    container(Space::new(width, Length::Fixed(height)))
        .style(container::rounded_box)
        .into()
}

fn not_found<'a>() -> Element<'a, Message> {
    column![
        text("Project Not Found").size(36).font(BOLD),
        text("The project you're looking for doesn't exist or has been removed."),
        button(text("Return Home"))
            .on_press(Message::Navigate(Route::Home.to_location()))
            .style(button::primary)
            .padding([12, 24]),
    ]
    .spacing(24)
    .padding([64, 0])
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn found<'a>(project: &'a Project, carousel: Option<&'a Carousel>) -> Element<'a, Message> {
    let back = button(text("← Back to Projects"))
        .on_press(Message::Navigate(Route::Home.to_location()))
        .style(button::text);

    let header = column![
        row![
            text(project.title.as_str()).size(36).font(BOLD),
            container(text(project.category.as_str()).size(13))
                .padding([4, 12])
                .style(container::rounded_box),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
        text(project.description.as_str()).color(MUTED),
    ]
    .spacing(12);

    let links = LinkPanel::for_project(project);

    column![back, header]
        .push_maybe(carousel.map(Carousel::view))
        .push(panel("Project Overview", text(project.overview.as_str()).into()))
        .push(
            row![
                panel("Technologies", tech_tags(&project.techs)),
                panel("Project Links", links.into_view()),
            ]
            .spacing(24),
        )
        .spacing(32)
        .width(Length::Fill)
        .into()
}

/// Every tech, in catalog order, duplicates included
fn tech_tags(techs: &[Tech]) -> Element<'_, Message> {
    let tags: Vec<Element<'_, Message>> = techs
        .iter()
        .map(|tech| {
            container(
                row![text(tech.icon.as_str()), text(tech.name.as_str()).font(BOLD)]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
            .padding([10, 16])
            .style(container::rounded_box)
            .into()
        })
        .collect();

    Wrap::with_elements(tags)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

/// Titled card used for the overview, technology and link sections
fn panel<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(20).font(BOLD), body].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn page(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .max_width(PAGE_WIDTH)
        .padding([48, 24])
        .width(Length::Fill)
        .into()
}
