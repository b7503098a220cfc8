use std::sync::Arc;

use iced::{
    Center, Color, Element, Fill, Task, Theme, application,
    futures::stream,
    widget::{column, container, text},
};
use parking_lot::RwLock;
use tokio::task::spawn_blocking;
use tracing::{Level, debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vidaextra_lib::{Profile, ProfileFeed, Repository, session::Route};

use crate::{
    components::{
        dashboard::{self, Dashboard},
        onboarding::{self, Onboarding},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ProfileChanged(Option<Profile>),
    Saved(Result<(), String>),
    // Components
    Onboarding(onboarding::Message),
    Dashboard(dashboard::Message),
}

enum Screen {
    Loading,
    Failed(String),
    Onboarding(Onboarding),
    Dashboard(Dashboard),
}

struct App {
    title: String,
    cfg: Cfg,
    repo: Option<Repository>,
    route: Route,
    screen: Screen,
    /// Last failed write, shown under the current screen
    error: Option<String>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        debug!("Using theme {}", cfg.read().theme);

        let mut app = Self {
            title: "VidaExtra".into(),
            cfg,
            repo: None,
            route: Route::default(),
            screen: Screen::Loading,
            error: None,
        };

        match Repository::new() {
            Ok(repo) => {
                let feed = repo.observe();
                app.repo = Some(repo);
                (app, Task::run(profile_updates(feed), Message::ProfileChanged))
            }
            Err(err) => {
                error!("Failed to open the profile store: {err}");
                app.screen = Screen::Failed(err.to_string());
                (app, Task::none())
            }
        }
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProfileChanged(profile) => {
                let route = Route::of(profile.as_ref());
                if route != self.route {
                    info!("Route changed: {:?} -> {:?}", self.route, route);
                    self.route = route;
                }

                match (self.route, profile) {
                    (Route::HasProfile(_), Some(profile)) => {
                        let currency = self
                            .repo
                            .as_ref()
                            .map(|repo| repo.cfg().read().currency.clone())
                            .unwrap_or_default();
                        self.screen = Screen::Dashboard(Dashboard::new(profile, currency));
                    }
                    // Keep whatever the user has typed so far
                    (Route::NoProfile, _) if matches!(self.screen, Screen::Onboarding(_)) => {}
                    _ => self.screen = Screen::Onboarding(Onboarding::new()),
                }

                Task::none()
            }
            Message::Saved(Ok(())) => {
                self.error = None;
                Task::none()
            }
            Message::Saved(Err(err)) => {
                error!("Failed to save profile: {err}");
                self.error = Some(err);
                Task::none()
            }
            // Redirect messages to relevant child components
            Message::Onboarding(message) => match &mut self.screen {
                Screen::Onboarding(onboarding) => match onboarding.update(message) {
                    onboarding::Action::None => Task::none(),
                    onboarding::Action::Create(profile) => {
                        self.write(move |repo| repo.upsert(&profile))
                    }
                },
                _ => Task::none(),
            },
            Message::Dashboard(message) => match &mut self.screen {
                Screen::Dashboard(dashboard) => match dashboard.update(message) {
                    dashboard::Action::Apply(action) => self.write(move |repo| repo.apply(action)),
                },
                _ => Task::none(),
            },
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &self.screen {
            Screen::Loading => container(text("Cargando...")).center(Fill).into(),
            Screen::Failed(err) => container(text(format!("No se pudieron cargar los datos: {err}")))
                .center(Fill)
                .into(),
            Screen::Onboarding(onboarding) => onboarding.view().map(Message::Onboarding),
            Screen::Dashboard(dashboard) => dashboard.view().map(Message::Dashboard),
        };

        column![
            screen,
            self.error.as_ref().map(|err| {
                text(format!("No se pudo guardar: {err}")).color(Color::from_rgb8(0xD3, 0x2F, 0x2F))
            }),
        ]
        .align_x(Center)
        .height(Fill)
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }

    /// Carry out a write off the UI thread. The stored profile comes back through the feed.
    fn write<F>(&self, write: F) -> Task<Message>
    where
        F: FnOnce(&Repository) -> vidaextra_lib::Result<()> + Send + 'static,
    {
        let Some(repo) = self.repo.clone() else {
            return Task::none();
        };

        Task::perform(
            async move {
                spawn_blocking(move || write(&repo))
                    .await
                    .map_err(|err| err.to_string())
                    .and_then(|result| result.map_err(|err| err.to_string()))
            },
            Message::Saved,
        )
    }
}

/// Every state of the stored profile, starting with the current one
fn profile_updates(feed: ProfileFeed) -> impl stream::Stream<Item = Option<Profile>> {
    stream::unfold(feed, |mut feed| async move {
        feed.next().await.map(|profile| (profile, feed))
    })
}
