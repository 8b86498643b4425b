/// Single-slide image viewer for a project's screenshots
///
/// The carousel keeps the selected slide and the load status of every
/// image. Navigation wraps in both directions.
use iced::widget::{button, column, container, horizontal_space, image, row, text, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};
use log::{debug, warn};
use std::path::{Component, Path, PathBuf};

use crate::state::data::Project;
use crate::Message;

/// Height of the visible slide in logical pixels
const SLIDE_HEIGHT: f32 = 420.0;
/// Side of a position marker
const MARKER_SIZE: f32 = 10.0;

/// Load status of one slide's image
#[derive(Debug, Clone)]
pub enum SlideContent {
    Loading,
    Ready(image::Handle),
    /// Missing file, unreadable file, or a remote reference
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub reference: String,
    pub alt: String,
    pub content: SlideContent,
}

/// One clickable position indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    /// Project the slides belong to, used to drop stale loads
    slug: String,
    slides: Vec<Slide>,
    current: usize,
}

impl Carousel {
    /// Build a carousel for a project, or `None` when it has no images
    pub fn for_project(project: &Project) -> Option<Self> {
        if project.images.is_empty() {
            return None;
        }

        let slides = project
            .images
            .iter()
            .enumerate()
            .map(|(index, reference)| Slide {
                reference: reference.clone(),
                alt: project.image_alt(index),
                content: SlideContent::Loading,
            })
            .collect();

        Some(Carousel {
            slug: project.slug.clone(),
            slides,
            current: 0,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Index of the visible slide
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Advance one slide, wrapping from the last to the first
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len();
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.current = (self.current + self.len() - 1) % self.len();
    }

    /// Jump to a marker. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        (0..self.len()).map(move |index| Marker {
            index,
            active: index == self.current,
        })
    }

    /// Image references in slide order
    pub fn references(&self) -> Vec<String> {
        self.slides.iter().map(|slide| slide.reference.clone()).collect()
    }

    /// Store load results for `slug`.
    /// Returns `false` if they belong to another project and were dropped.
    pub fn apply_loaded(&mut self, slug: &str, contents: Vec<SlideContent>) -> bool {
        if slug != self.slug || contents.len() != self.slides.len() {
            debug!(
                "event=slides_stale module=carousel showing={} received={}",
                self.slug, slug
            );
            return false;
        }

        for (slide, content) in self.slides.iter_mut().zip(contents) {
            slide.content = content;
        }
        true
    }

    pub fn view(&self) -> Element<'_, Message> {
        let slide = self.current_slide();

        let picture: Element<'_, Message> = match &slide.content {
            SlideContent::Ready(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(SLIDE_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            SlideContent::Loading => slide_placeholder("Loading…"),
            SlideContent::Unavailable => slide_placeholder(&slide.alt),
        };

        // Controls are always shown, even for a single slide
        let stage = row![
            button(text("‹").size(24))
                .on_press(Message::PreviousSlide)
                .style(button::secondary),
            container(picture).width(Length::Fill),
            button(text("›").size(24))
                .on_press(Message::NextSlide)
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let markers = Row::with_children(self.markers().map(marker_button)).spacing(8);

        let position = text(format!("{} / {}", self.current() + 1, self.len())).size(12);

        column![
            stage,
            row![horizontal_space(), markers, horizontal_space(), position]
                .align_y(Alignment::Center),
        ]
        .spacing(12)
        .width(Length::Fill)
        .into()
    }
}

fn marker_button<'a>(marker: Marker) -> Element<'a, Message> {
    button(Space::new(
        Length::Fixed(MARKER_SIZE),
        Length::Fixed(MARKER_SIZE),
    ))
    .padding(0)
    .on_press(Message::SelectSlide(marker.index))
    .style(if marker.active {
        button::primary
    } else {
        button::secondary
    })
    .into()
}

fn slide_placeholder<'a>(label: &str) -> Element<'a, Message> {
    container(text(label.to_string()).size(14))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(SLIDE_HEIGHT))
        .style(container::rounded_box)
        .into()
}

/// Read every slide image from disk.
/// Runs on the tokio executor so large screenshots never block the UI.
pub async fn load_slides(asset_root: PathBuf, references: Vec<String>) -> Vec<SlideContent> {
    let mut contents = Vec::with_capacity(references.len());

    for reference in &references {
        let Some(path) = asset_path(&asset_root, reference) else {
            debug!("event=slide_skipped module=carousel reference={reference:?}");
            contents.push(SlideContent::Unavailable);
            continue;
        };

        match tokio::fs::read(&path).await {
            Ok(bytes) => contents.push(SlideContent::Ready(image::Handle::from_bytes(bytes))),
            Err(err) => {
                warn!(
                    "event=slide_load module=carousel status=error path={} error={err}",
                    path.display()
                );
                contents.push(SlideContent::Unavailable);
            }
        }
    }

    contents
}

/// Map an image reference onto the asset root.
/// Remote URLs and references escaping the root are not loaded.
fn asset_path(root: &Path, reference: &str) -> Option<PathBuf> {
    if reference.contains("://") {
        return None;
    }

    let relative = Path::new(reference.trim_start_matches('/'));
    if relative.as_os_str().is_empty()
        || relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
    {
        return None;
    }

    Some(root.join(relative))
}
