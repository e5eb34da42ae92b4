//! `jsgen`: compile a selector + action + options into a JavaScript snippet.

use std::{env, process::ExitCode};

use clap::{Parser, Subcommand};
use jsgen::{Compiler, Library, ParseLibraryError, options};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "jsgen",
    about = "Generate jQuery, MooTools or Prototype snippets from the command line",
    version
)]
struct Cli {
    /// Target library (jquery|mootools|prototype)
    #[arg(long, default_value = "jquery")]
    library: String,

    /// Set the log level filter (error|warn|info|debug|trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(long, conflicts_with = "log_level")]
    debug: bool,

    #[command(subcommand)]
    action: Action,
}

/// One compiler action per subcommand.
#[derive(Subcommand, Debug)]
enum Action {
    /// Run a visual effect on the selected element(s)
    Effect {
        /// Selector of the target element(s)
        #[arg(long)]
        selector: String,
        /// Effect name, e.g. hide, fadeIn, slideOut
        name: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Bind an event handler to the selected element(s)
    Event {
        /// Selector of the target element(s)
        #[arg(long)]
        selector: String,
        /// Event name, e.g. click
        name: String,
        /// Callback body or identifier
        callback: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Register a dom-ready callback
    DomReady {
        /// Callback body
        callback: String,
    },
    /// Iterate the selected elements
    Each {
        /// Selector of the target element(s)
        #[arg(long)]
        selector: String,
        /// Callback body run per element
        callback: String,
    },
    /// Emit an ajax request
    Request {
        /// Request URL
        url: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Make the selected list sortable
    Sortable {
        /// Selector of the list element
        #[arg(long)]
        selector: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Make the selected element draggable
    Drag {
        /// Selector of the element
        #[arg(long)]
        selector: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Make the selected element a drop target
    Drop {
        /// Selector of the element
        #[arg(long)]
        selector: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Attach slider behavior to the selected element
    Slider {
        /// Selector of the track element
        #[arg(long)]
        selector: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
    /// Serialize the selected form (or the form containing the selection)
    SerializeForm {
        /// Selector of the element
        #[arg(long)]
        selector: String,
        /// Options as a JSON object
        #[arg(long)]
        options: Option<String>,
    },
}

/// CLI failure modes.
#[derive(Debug, Error)]
enum Error {
    /// The --library value did not name a supported library.
    #[error(transparent)]
    Library(#[from] ParseLibraryError),
    /// The --options value was not a valid JSON encoding of the option set.
    #[error("Invalid options JSON: {0}")]
    Options(#[from] serde_json::Error),
}

/// Parse an optional `--options` JSON string into a typed option struct.
fn parse_options<T: DeserializeOwned + Default>(raw: Option<&str>) -> Result<T, Error> {
    match raw {
        Some(s) => Ok(serde_json::from_str(s)?),
        None => Ok(T::default()),
    }
}

/// Resolve the tracing filter spec from flags and the environment.
fn log_spec(debug: bool, log_level: Option<&str>) -> String {
    if debug {
        return "debug".to_string();
    }
    if let Some(level) = log_level {
        return level.to_string();
    }
    env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}

/// Run the selected action and return the snippet.
fn run(cli: &Cli) -> Result<String, Error> {
    let library: Library = cli.library.parse()?;
    let mut compiler = Compiler::new(library);
    let snippet = match &cli.action {
        Action::Effect {
            selector,
            name,
            options,
        } => {
            let opts: options::EffectOptions = parse_options(options.as_deref())?;
            compiler.select(selector).effect(name, &opts)
        }
        Action::Event {
            selector,
            name,
            callback,
            options,
        } => {
            let opts: options::EventOptions = parse_options(options.as_deref())?;
            compiler.select(selector).event(name, callback, &opts)
        }
        Action::DomReady { callback } => compiler.dom_ready(callback),
        Action::Each { selector, callback } => compiler.select(selector).each(callback),
        Action::Request { url, options } => {
            let opts: options::RequestOptions = parse_options(options.as_deref())?;
            compiler.request(url, &opts)
        }
        Action::Sortable { selector, options } => {
            let opts: options::SortableOptions = parse_options(options.as_deref())?;
            compiler.select(selector).sortable(&opts)
        }
        Action::Drag { selector, options } => {
            let opts: options::DragOptions = parse_options(options.as_deref())?;
            compiler.select(selector).drag(&opts)
        }
        Action::Drop { selector, options } => {
            let opts: options::DropOptions = parse_options(options.as_deref())?;
            compiler.select(selector).drop_target(&opts)
        }
        Action::Slider { selector, options } => {
            let opts: options::SliderOptions = parse_options(options.as_deref())?;
            compiler.select(selector).slider(&opts)
        }
        Action::SerializeForm { selector, options } => {
            let opts: options::SerializeOptions = parse_options(options.as_deref())?;
            compiler.select(selector).serialize_form(&opts)
        }
    };
    Ok(snippet)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_spec(cli.debug, cli.log_level.as_deref()))
        .with_writer(std::io::stderr)
        .init();
    match run(&cli) {
        Ok(snippet) => {
            println!("{}", snippet);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_compiles_an_effect() {
        let cli = Cli::parse_from([
            "jsgen",
            "--library",
            "jquery",
            "effect",
            "--selector",
            "#foo",
            "hide",
            "--options",
            r#"{"speed":"fast"}"#,
        ]);
        assert_eq!(run(&cli).unwrap(), "$(\"#foo\").hide(\"fast\");");
    }

    #[test]
    fn bad_library_is_an_error() {
        let cli = Cli::parse_from(["jsgen", "--library", "dojo", "dom-ready", "init();"]);
        assert!(matches!(run(&cli), Err(Error::Library(_))));
    }

    #[test]
    fn bad_options_json_is_an_error() {
        let cli = Cli::parse_from([
            "jsgen",
            "request",
            "/x",
            "--options",
            "not json",
        ]);
        assert!(matches!(run(&cli), Err(Error::Options(_))));
    }
}
