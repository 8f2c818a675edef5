//! Interactive REPL mode

use std::io::{self, Write};

use dialoguer::Confirm;
use hmr_domain::Command;

use crate::parser::{parse_line, Input};
use crate::render::{self, OutputMode, MENU};
use crate::session::RobotSession;

/// What the driver should print for one line, and whether to stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub exit: bool,
}

impl Response {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn stop(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// Interactive CLI driving one robot
pub struct InteractiveCli {
    session: RobotSession,
    output: OutputMode,
    confirm_shutdown: bool,
}

impl InteractiveCli {
    pub fn new(session: RobotSession) -> Self {
        Self {
            session,
            output: OutputMode::Human,
            confirm_shutdown: false,
        }
    }

    /// Builder: print JSON instead of text
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Builder: ask before shutting down
    pub fn with_shutdown_confirmation(mut self, confirm: bool) -> Self {
        self.confirm_shutdown = confirm;
        self
    }

    pub fn session(&self) -> &RobotSession {
        &self.session
    }

    /// Run the interactive REPL until exit, shutdown or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.output == OutputMode::Human {
            println!("HMR Interactive Mode");
            println!("Type help for commands, exit to quit");
        }

        loop {
            if self.output == OutputMode::Human {
                println!();
                println!("{}", MENU);
                print!("Enter command: ");
                io::stdout().flush()?;
            }

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }

            if input.trim().is_empty() {
                continue;
            }

            let response = self.respond(&input)?;
            if !response.text.is_empty() {
                println!("{}", response.text);
            }
            if response.exit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one line of input
    pub fn respond(&mut self, line: &str) -> anyhow::Result<Response> {
        let input = match parse_line(line) {
            Ok(input) => input,
            Err(e) => return Ok(Response::say(self.parse_failure(&e.to_string()))),
        };

        let response = match input {
            Input::Robot(Command::Shutdown) if !self.shutdown_confirmed()? => {
                Response::say("Shutdown cancelled.")
            }
            Input::Robot(command) => {
                let response = self.run_command(command);
                if self.session.is_done() {
                    Response::stop(response)
                } else {
                    Response::say(response)
                }
            }
            Input::Help => Response::say(MENU),
            Input::Status => Response::say(render::render_status(&self.session)),
            Input::Audit => Response::say(render::render_audit(&self.session, 5)),
            Input::Exit => Response::stop(match self.output {
                OutputMode::Human => "Goodbye!",
                OutputMode::Json => "",
            }),
        };

        Ok(response)
    }

    fn run_command(&mut self, command: Command) -> String {
        match self.output {
            OutputMode::Human => match self.session.execute(command) {
                Ok(event) => render::render_event(&event),
                Err(err) => render::render_error(&err),
            },
            OutputMode::Json => {
                let label = command.clone();
                let result = self.session.execute(command);
                render::result_json(&label, &result).to_string()
            }
        }
    }

    fn parse_failure(&self, message: &str) -> String {
        match self.output {
            OutputMode::Human => console::style(message).red().to_string(),
            OutputMode::Json => serde_json::json!({ "ok": false, "error": "parse", "message": message })
                .to_string(),
        }
    }

    fn shutdown_confirmed(&self) -> anyhow::Result<bool> {
        if !self.confirm_shutdown || !self.session.robot().is_active() {
            return Ok(true);
        }
        let confirmed = Confirm::new()
            .with_prompt("Shut the robot down? It cannot be restarted")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
