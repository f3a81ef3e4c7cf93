use anyhow::{anyhow, bail, Result};
use rustyline::{error::ReadlineError, Editor};
use tracing::debug;

use crate::scenario::Scenario;

const HISTORY: &str = "/tmp/lambda.history";

#[derive(PartialEq, Eq, Debug)]
pub enum Command {
    Run(Vec<Scenario>),
    ShowLimit,
    SetLimit(Option<usize>),
    Help,
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        let (cmd, arg) = if let Some(stripped) = input.strip_prefix(':') {
            stripped
                .trim_start()
                .split_once(' ')
                .map(|(cmd, arg)| (cmd, arg.trim()))
                .unwrap_or((stripped, ""))
        } else {
            ("", input)
        };
        Ok(Some(match cmd {
            "" | "r" | "run" => match arg {
                "" | "all" => Command::Run(Scenario::ALL.to_vec()),
                name => Command::Run(vec![Scenario::from_name(name)
                    .ok_or_else(|| anyhow!("Unknown scenario {name}"))?]),
            },
            "l" | "limit" => match arg {
                "" => Command::ShowLimit,
                "off" => Command::SetLimit(None),
                n => Command::SetLimit(Some(
                    n.parse().map_err(|e| anyhow!("Bad step limit {n}: {e}"))?,
                )),
            },
            "h" | "he" | "hel" | "help" => Command::Help,
            _ => bail!("Unknown command {cmd}"),
        }))
    }
}

#[derive(Default)]
pub struct Session {
    limit: Option<usize>,
}

impl Session {
    fn show_help() {
        println!(
            "{}",
            r#"
simple | complex1 | complex2   -- run one demo term
all                            -- run every demo term
:limit                         -- show the step limit
:limit n                       -- give up after n reduction steps
:limit off                     -- evaluate without a limit
:help                          -- show this message
        "#
            .trim()
        );
    }

    fn show_limit(&self) {
        match self.limit {
            Some(limit) => println!("Step limit: {limit}"),
            None => println!("Step limit: off"),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Run(scenarios) => {
                for scenario in scenarios {
                    let report = scenario.run(self.limit)?;
                    println!("{report}");
                }
            }
            Command::ShowLimit => self.show_limit(),
            Command::SetLimit(limit) => {
                debug!(?limit, "step limit changed");
                self.limit = limit;
                self.show_limit();
            }
            Command::Help => Self::show_help(),
        }
        Ok(())
    }

    fn handle(&mut self, input: &str) -> Result<()> {
        match Command::parse(input)? {
            Some(command) => self.execute(command),
            None => Ok(()),
        }
    }

    pub fn start(mut self) -> Result<()> {
        let mut editor = Editor::<()>::new();
        editor.load_history(HISTORY).ok();
        loop {
            match editor.readline("λ> ") {
                Ok(line) => {
                    editor.add_history_entry(line.as_str());
                    if let Err(e) = self.handle(&line) {
                        eprintln!("Error: {e}");
                    }
                    editor.save_history(HISTORY)?;
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    println!("Bye!");
                    break Ok(());
                }
                Err(e) => break Err(e.into()),
            }
        }
    }
}
