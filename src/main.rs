use clap::Parser;
use iced::widget::{button, column, container, row, scrollable, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use log::info;
use std::path::PathBuf;
use thiserror::Error;

mod config;
mod logging;
mod state;
mod ui;

use state::catalog::{Catalog, CatalogError};
use state::controller::{ViewController, ViewState};
use state::route::Route;
use ui::carousel::{self, Carousel, SlideContent};

/// Failures that stop the viewer before its window opens
#[derive(Debug, Error)]
enum AppError {
    #[error("failed to start logging: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
    #[error("bundled catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
    #[error("window error: {0}")]
    Ui(#[from] iced::Error),
}

/// Main application state
struct Portfolio {
    /// The read-only project catalog
    catalog: &'static Catalog,
    /// Directory image references resolve against
    asset_root: PathBuf,
    /// Page currently shown
    route: Route,
    /// Contents of the address bar
    location_input: String,
    /// Detail page state; present only while a project route is mounted
    controller: Option<ViewController<'static>>,
    /// Slides of the project being shown, if it has images
    carousel: Option<Carousel>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User typed in the address bar
    LocationEdited(String),
    /// Go to a location (address bar, back link, listing entry)
    Navigate(String),
    /// The navigation has been fully delivered to the page
    NavigationSettled,
    /// Background slide loading finished for a project slug
    SlidesLoaded(String, Vec<SlideContent>),
    NextSlide,
    PreviousSlide,
    SelectSlide(usize),
    /// User clicked an outbound link row
    OpenLink(String),
}

impl Portfolio {
    /// Create the application and navigate to the initial location
    fn new(catalog: &'static Catalog, asset_root: PathBuf, location: String) -> (Self, Task<Message>) {
        let mut portfolio = Portfolio {
            catalog,
            asset_root,
            route: Route::Home,
            location_input: String::new(),
            controller: None,
            carousel: None,
        };
        let task = portfolio.navigate(&location);
        (portfolio, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LocationEdited(location) => {
                self.location_input = location;
                Task::none()
            }
            Message::Navigate(location) => self.navigate(&location),
            Message::NavigationSettled => {
                let settled = self
                    .controller
                    .as_mut()
                    .map(ViewController::settle)
                    .unwrap_or(false);
                if settled {
                    self.sync_carousel()
                } else {
                    Task::none()
                }
            }
            Message::SlidesLoaded(slug, contents) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.apply_loaded(&slug, contents);
                }
                Task::none()
            }
            Message::NextSlide => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.next();
                }
                Task::none()
            }
            Message::PreviousSlide => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.previous();
                }
                Task::none()
            }
            Message::SelectSlide(index) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.select(index);
                }
                Task::none()
            }
            Message::OpenLink(href) => {
                ui::links::open_external(&href);
                Task::none()
            }
        }
    }

    /// Apply a navigation event.
    ///
    /// Entering the project route mounts a fresh controller; a navigation
    /// that stays on it re-observes the parameter on the mounted one.
    fn navigate(&mut self, location: &str) -> Task<Message> {
        let route = Route::parse(location);
        info!("event=navigate module=app location={:?} route={:?}", location, route);
        self.location_input = route.to_location();

        let task = match &route {
            Route::Home => {
                self.controller = None;
                self.carousel = None;
                Task::none()
            }
            Route::Project { .. } => {
                let mounted = matches!(self.route, Route::Project { .. }) && self.controller.is_some();
                if !mounted {
                    self.controller = Some(ViewController::new(self.catalog));
                    self.carousel = None;
                }

                let changed = self
                    .controller
                    .as_mut()
                    .map(|controller| controller.observe(route.name()))
                    .unwrap_or(false);
                let sync = if changed { self.sync_carousel() } else { Task::none() };

                if mounted {
                    sync
                } else {
                    Task::batch([sync, Task::done(Message::NavigationSettled)])
                }
            }
        };

        self.route = route;
        task
    }

    /// Rebuild the carousel for the controller's current state and start
    /// loading its slides
    fn sync_carousel(&mut self) -> Task<Message> {
        let project = match self.controller.as_ref().map(ViewController::state) {
            Some(ViewState::Found(project)) => project,
            _ => {
                self.carousel = None;
                return Task::none();
            }
        };

        self.carousel = Carousel::for_project(project);
        let Some(shown) = self.carousel.as_ref() else {
            return Task::none();
        };

        let slug = shown.slug().to_string();
        Task::perform(
            carousel::load_slides(self.asset_root.clone(), shown.references()),
            move |contents| Message::SlidesLoaded(slug.clone(), contents),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let address_bar = row![
            text_input("/project?name=…", &self.location_input)
                .on_input(Message::LocationEdited)
                .on_submit(Message::Navigate(self.location_input.clone()))
                .padding(8),
            button("Go")
                .on_press(Message::Navigate(self.location_input.clone()))
                .padding([8, 16]),
        ]
        .spacing(8)
        .padding(12)
        .align_y(Alignment::Center);

        let page = match (&self.route, &self.controller) {
            (Route::Project { .. }, Some(controller)) => {
                ui::page::detail(controller.state(), self.carousel.as_ref())
            }
            _ => ui::page::home(self.catalog),
        };

        column![
            address_bar,
            scrollable(container(page).center_x(Length::Fill)).height(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> Result<(), AppError> {
    let config = config::Config::parse();
    let _logger = logging::init(config.log_level)?;

    let catalog = state::catalog::builtin()?;
    info!(
        "event=startup module=app projects={} assets={} location={:?}",
        catalog.len(),
        config.assets.display(),
        config.location
    );

    let asset_root = config.assets;
    let location = config.location;
    iced::application("Folio", Portfolio::update, Portfolio::view)
        .theme(Portfolio::theme)
        .centered()
        .run_with(move || Portfolio::new(catalog, asset_root, location))?;

    Ok(())
}
