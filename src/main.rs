use anyhow::{Context, Result};
use osascript_tag::{Invoker, Language, Options, ScriptOutput};
use std::io::Read;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt, Debug)]
#[structopt(name = "osatag", about = "Run AppleScript or JXA through osascript")]
struct CommandOptions {
    #[structopt(
        short,
        long,
        default_value = "AppleScript",
        help = "Script language (AppleScript or JavaScript)"
    )]
    language: Language,
    #[structopt(long, help = "Shorthand for --language JavaScript")]
    jxa: bool,
    #[structopt(short = "s", long, help = "Output style flags passed to osascript -s (h, s, e, o)")]
    flags: Option<String>,
    #[structopt(long, help = "Parse the script result as JSON")]
    parse: bool,
    #[structopt(
        short,
        long = "arg",
        number_of_values = 1,
        help = "JSON value passed to a JavaScript script as argv (repeatable)"
    )]
    args: Vec<String>,
    #[structopt(help = "Script text, read from stdin when omitted")]
    script: Vec<String>,
}

impl CommandOptions {
    fn to_options(&self) -> Options {
        let mut options = Options::new()
            .language(if self.jxa {
                Language::JavaScript
            } else {
                self.language
            })
            .parse(self.parse);
        if let Some(flags) = &self.flags {
            options = options.flags(flags.clone());
        }
        for arg in &self.args {
            // Bare words that aren't JSON are passed as strings.
            let value = serde_json::from_str(arg)
                .unwrap_or_else(|_| serde_json::Value::String(arg.clone()));
            options = options.arg(value);
        }
        options
    }

    fn read_script(&self) -> Result<String> {
        if !self.script.is_empty() {
            return Ok(self.script.join(" "));
        }
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Couldn't read script from stdin")?;
        Ok(script)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CommandOptions::from_args();
    let script = args.read_script()?;
    let invoker = Invoker::new(args.to_options());

    match invoker.run(script).await.context("osascript failed")? {
        ScriptOutput::Text(text) => println!("{}", text),
        ScriptOutput::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}
