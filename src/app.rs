use crate::cli::Command;
use crate::config::Config;
use crate::directory::Directory;
use crate::error::AppResult;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::state::{State, View};
use anyhow::Result;
use log::*;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Oversees request handling, state management, and output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    directory: Directory,
}

impl App {
    /// Return a new instance for the given configuration.
    ///
    pub fn new(config: &Config) -> Self {
        App {
            state: Arc::new(Mutex::new(State::new(
                config.page_size,
                config.defaults.clone(),
            ))),
            directory: Directory::new(config),
        }
    }

    /// Start a new application according to the given configuration and run
    /// the command, writing its output to stdout. Returns the result of the
    /// command.
    ///
    pub async fn start(config: Config, command: Command) -> Result<()> {
        info!("Starting application...");
        let app = App::new(&config);
        let mut stdout = io::stdout();
        let result = app.run(command, &mut stdout).await;
        stdout.flush()?;
        info!("Exiting application...");
        result.map_err(anyhow::Error::from)
    }

    /// Apply the command to the state, dispatch the matching network event,
    /// and render the resulting view.
    ///
    pub async fn run(&self, command: Command, out: &mut dyn Write) -> AppResult<()> {
        let event = self.prepare(command).await;
        let mut handler = NetworkEventHandler::new(&self.state, &self.directory);
        let result = handler.handle(event.clone()).await;

        let state = self.state.lock().await;
        match (&event, &result) {
            (NetworkEvent::CreateEmployee, Ok(())) => {
                writeln!(out, "Employee added.")?;
            }
            _ => crate::ui::render(out, &state)?,
        }
        result
    }

    /// Translate the command into a network event, filling the form first
    /// when adding an employee.
    ///
    async fn prepare(&self, command: Command) -> NetworkEvent {
        match command {
            Command::List { page } => NetworkEvent::ListEmployees { page },
            Command::Show { id } => NetworkEvent::GetEmployee { id },
            Command::Add { fields } => {
                let mut state = self.state.lock().await;
                state.set_view(View::AddEmployee);
                let form = state.get_form_mut();
                for (name, value) in fields {
                    debug!("Setting form field {}", name);
                    form.update_field(name, &value);
                }
                NetworkEvent::CreateEmployee
            }
        }
    }
}
