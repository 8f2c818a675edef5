//! hmr run command - execute a script of robot commands

use clap::Args;
use std::path::PathBuf;

use anyhow::Context;

use super::SessionArgs;
use crate::interactive::InteractiveCli;
use crate::parser::parse_line;
use crate::session::RobotSession;

#[derive(Debug, Args)]
pub struct RunCommand {
    /// Script with one command per line (`#` starts a comment)
    pub script: PathBuf,

    /// Stop at the first line that does not parse
    #[arg(long)]
    pub strict: bool,
}

impl RunCommand {
    pub fn run(&self, args: &SessionArgs) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.script)
            .with_context(|| format!("failed to read script {}", self.script.display()))?;

        let config = args.load_config()?;
        let session = RobotSession::from_config(&config)?;
        let mut cli = InteractiveCli::new(session).with_output(args.output_mode());

        for line in self.execute(&mut cli, &content)? {
            println!("{}", line);
        }

        args.export_audit(cli.session())
    }

    /// Feed every command line to the driver, collecting its replies
    ///
    /// Stops after `shutdown` or `exit`.
    pub fn execute(&self, cli: &mut InteractiveCli, content: &str) -> anyhow::Result<Vec<String>> {
        let mut replies = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if self.strict {
                parse_line(line).with_context(|| {
                    format!("{}:{}: invalid command", self.script.display(), index + 1)
                })?;
            }

            tracing::debug!(line = index + 1, command = line, "script command");
            let response = cli.respond(line)?;
            if !response.text.is_empty() {
                replies.push(response.text);
            }
            if response.exit {
                break;
            }
        }

        Ok(replies)
    }
}
