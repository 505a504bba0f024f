use clap::{Parser, Subcommand, ValueEnum};
use formsmith_codegen::{export_file_name, generate_form, Dialect};
use formsmith_model::Form;
use formsmith_preview::{render_page, PreviewMode};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formsmith")]
#[command(about = "Formsmith: export and preview form documents")]
#[command(version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate standalone code for a form document
    Export {
        /// Input form .json file
        path: String,

        /// Output dialect: html, react or vue
        #[arg(short, long, env = "FORMSMITH_DIALECT", default_value = "html")]
        dialect: Dialect,

        /// Directory to write into (defaults to the input's directory)
        #[arg(short, long, env = "FORMSMITH_OUT_DIR")]
        out_dir: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Check that a form document loads and generates in every dialect
    Check {
        /// Input form .json file
        path: String,
    },

    /// Render a standalone preview page
    Preview {
        /// Input form .json file
        path: String,

        #[arg(short, long, value_enum, default_value_t = Mode::Public)]
        mode: Mode,

        /// Directory to write into (defaults to the input's directory)
        #[arg(short, long, env = "FORMSMITH_OUT_DIR")]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Builder,
    Public,
}

impl From<Mode> for PreviewMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Builder => PreviewMode::Builder,
            Mode::Public => PreviewMode::Public,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Export {
            path,
            dialect,
            out_dir,
            stdout,
        } => cmd_export(&path, dialect, out_dir.as_deref(), stdout),
        Command::Check { path } => cmd_check(&path),
        Command::Preview {
            path,
            mode,
            out_dir,
        } => cmd_preview(&path, mode.into(), out_dir.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_form(path: &str) -> Form {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    let source = match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    };
    match Form::from_json(&source) {
        Ok(form) => {
            tracing::debug!(path, id = %form.id, fields = form.form_fields.len(), "form loaded");
            form
        }
        Err(e) => {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// `out_dir` if given, otherwise the directory holding `input`.
fn output_dir(input: &str, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => Path::new(input)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    }
}

fn write_output(path: &Path, contents: &str) {
    if let Some(dir) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error creating {}: {e}", dir.display());
            std::process::exit(1);
        }
    }
    if let Err(e) = std::fs::write(path, contents) {
        eprintln!("Error writing {}: {e}", path.display());
        std::process::exit(1);
    }
}

fn cmd_export(path: &str, dialect: Dialect, out_dir: Option<&Path>, stdout: bool) {
    let form = read_form(path);

    let code = match generate_form(&form, dialect) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if stdout {
        print!("{code}");
        return;
    }

    let target = output_dir(path, out_dir).join(export_file_name(&form.title, dialect));
    write_output(&target, &code);
    eprintln!("Exported: {}", target.display());
}

fn cmd_check(path: &str) {
    let form = read_form(path);

    for dialect in Dialect::ALL {
        if let Err(e) = generate_form(&form, dialect) {
            eprintln!("{dialect}: {e}");
            std::process::exit(1);
        }
    }

    eprintln!("OK: {path} ({} fields)", form.form_fields.len());
}

fn cmd_preview(path: &str, mode: PreviewMode, out_dir: Option<&Path>) {
    let form = read_form(path);
    let page = render_page(&form, mode);

    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("form");
    let target = output_dir(path, out_dir).join(format!("{stem}.preview.html"));
    write_output(&target, &page);
    eprintln!("Preview: {}", target.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_dir_defaults_to_input_parent() {
        assert_eq!(output_dir("forms/contact.json", None), PathBuf::from("forms"));
        assert_eq!(output_dir("contact.json", None), PathBuf::from("."));
    }

    #[test]
    fn test_output_dir_override() {
        assert_eq!(
            output_dir("forms/contact.json", Some(Path::new("dist"))),
            PathBuf::from("dist")
        );
    }

    #[test]
    fn test_cli_parses_dialect() {
        let cli = Cli::try_parse_from(["formsmith", "export", "f.json", "--dialect", "jsx"]).unwrap();
        match cli.command {
            Command::Export { dialect, .. } => assert_eq!(dialect, Dialect::React),
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_dialect() {
        assert!(Cli::try_parse_from(["formsmith", "export", "f.json", "-d", "svelte"]).is_err());
    }
}
