use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pointgen::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::{MakeWriter, SubscriberBuilder};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Labeled 2D point dataset generator")]
struct Cmd {
    /// Output directory; must exist unless --create-dir is given
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// RNG seed; drawn from entropy and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated column names
    #[arg(long, default_value = "x,y,class", value_delimiter = ',')]
    header: Vec<String>,

    #[arg(long, default_value = "black")]
    in_label: String,

    #[arg(long, default_value = "white")]
    out_label: String,

    /// Create the output directory if it is missing
    #[arg(long)]
    create_dir: bool,

    /// Write `<stem>.provenance.json` next to every CSV
    #[arg(long)]
    provenance: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Generate data1.csv .. data5.csv (default)
    All,
    /// Generate a single mode
    One {
        #[arg(long, value_enum)]
        mode: ModeArg,
        /// File name inside the output directory; defaults to the mode's batch name
        #[arg(long)]
        file: Option<String>,
        /// Also render a scatter PNG next to the CSV
        #[arg(long)]
        plot: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Circle,
    Triangle,
    Rectangle,
    Diagonal,
    Squares,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Circle => Mode::CircleBounded,
            ModeArg::Triangle => Mode::TriangleBounded,
            ModeArg::Rectangle => Mode::RectangleBounded,
            ModeArg::Diagonal => Mode::DiagonalSplit,
            ModeArg::Squares => Mode::SquaresBounded,
        }
    }
}

/// Parameters recorded in provenance sidecars.
#[derive(Serialize)]
struct RunParams<'a> {
    mode: &'a str,
    seed: u64,
    header: &'a [String],
    in_label: &'a str,
    out_label: &'a str,
    rows: usize,
    plot: Option<String>,
}

/// Log events go to `writer`; stdout stays reserved for progress lines and
/// the report.
fn log_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(writer)
        .finish()
}

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(log_subscriber(std::io::stderr))?;
    let cmd = Cmd::parse();
    match &cmd.action {
        Some(Action::Report) => report(),
        Some(Action::One { mode, file, plot }) => {
            let mode = Mode::from(*mode);
            let file = file.clone().unwrap_or_else(|| mode.file_name().to_string());
            let mut gen = generator(&cmd)?;
            let done = gen
                .generate(mode, &file, *plot)
                .with_context(|| format!("generating {}", mode.describe()))?;
            finish(&cmd, &gen, &[done])
        }
        Some(Action::All) | None => {
            let mut gen = generator(&cmd)?;
            let done = gen.generate_all().context("generating all datasets")?;
            finish(&cmd, &gen, &done)
        }
    }
}

fn generator(cmd: &Cmd) -> Result<Generator> {
    if cmd.create_dir {
        std::fs::create_dir_all(&cmd.out_dir)
            .with_context(|| format!("creating {}", cmd.out_dir.display()))?;
    }
    let header: Header = cmd
        .header
        .clone()
        .try_into()
        .map_err(|h: Vec<String>| anyhow::anyhow!("header needs 3 names, got {}", h.len()))?;
    let cfg = GeneratorCfg {
        header,
        class_map: ClassMap {
            inside: cmd.in_label.clone(),
            outside: cmd.out_label.clone(),
        },
        dir: cmd.out_dir.clone(),
        seed: cmd.seed,
        ..GeneratorCfg::default()
    };
    let gen = Generator::new(cfg)?;
    tracing::info!(seed = gen.seed(), dir = %cmd.out_dir.display(), "generator");
    Ok(gen)
}

fn finish(cmd: &Cmd, gen: &Generator, done: &[Generated]) -> Result<()> {
    for g in done {
        tracing::info!(
            mode = g.mode.describe(),
            csv = %g.csv.display(),
            rows = g.rows,
            plot = ?g.plot,
            "written"
        );
        if cmd.provenance {
            let params = RunParams {
                mode: g.mode.describe(),
                seed: gen.seed(),
                header: &gen.cfg().header,
                in_label: &gen.cfg().class_map.inside,
                out_label: &gen.cfg().class_map.outside,
                rows: g.rows,
                plot: g.plot.as_ref().map(|p| p.display().to_string()),
            };
            let payload = provenance::Payload::new(serde_json::to_value(params)?);
            provenance::write_sidecar(&g.csv, payload)?;
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let defaults = GeneratorCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": pointgen::VERSION,
        "params": {
            "dir": defaults.dir.display().to_string(),
            "header": defaults.header,
            "in_label": defaults.class_map.inside,
            "out_label": defaults.class_map.outside,
            "files": Mode::ALL.iter().map(|m| m.file_name()).collect::<Vec<_>>(),
        },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn defaults_parse_to_generate_all() {
        let cmd = Cmd::try_parse_from(["cli"]).unwrap();
        assert!(cmd.action.is_none());
        assert_eq!(cmd.out_dir, PathBuf::from("data"));
        assert_eq!(cmd.header, ["x", "y", "class"]);
        assert!(!cmd.provenance && !cmd.create_dir);
    }

    #[test]
    fn one_mode_with_options() {
        let cmd = Cmd::try_parse_from([
            "cli", "--seed", "7", "--header", "a,b,c", "one", "--mode", "diagonal", "--plot",
        ])
        .unwrap();
        assert_eq!(cmd.seed, Some(7));
        assert_eq!(cmd.header, ["a", "b", "c"]);
        match cmd.action {
            Some(Action::One { mode, file, plot }) => {
                assert_eq!(Mode::from(mode), Mode::DiagonalSplit);
                assert!(file.is_none());
                assert!(plot);
            }
            _ => panic!("expected one"),
        }
    }

    #[test]
    fn generator_writes_with_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let out_s = out.to_string_lossy().to_string();
        let cmd = Cmd::try_parse_from([
            "cli", "--out-dir", out_s.as_str(), "--create-dir", "--provenance", "--seed", "3",
        ])
        .unwrap();
        let mut gen = generator(&cmd).unwrap();
        let done = gen.generate(Mode::SquaresBounded, "sq.csv", false).unwrap();
        finish(&cmd, &gen, &[done]).unwrap();
        let sidecar = out.join("sq.provenance.json");
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["params"]["seed"], 3);
        assert_eq!(parsed["params"]["rows"], 1000);
        assert_eq!(parsed["params"]["mode"], "square bounded");
    }

    #[test]
    fn missing_dir_without_create_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("absent").to_string_lossy().to_string();
        let cmd = Cmd::try_parse_from(["cli", "--out-dir", out.as_str(), "--seed", "1"]).unwrap();
        let mut gen = generator(&cmd).unwrap();
        assert!(gen.generate_all().is_err());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn logs_stay_off_the_progress_stream() {
        let dir = tempfile::tempdir().unwrap();
        let logs = Capture::default();
        let sink = logs.clone();
        let mut progress = Vec::new();
        tracing::subscriber::with_default(log_subscriber(move || sink.clone()), || {
            let mut gen = Generator::new(GeneratorCfg {
                dir: dir.path().to_path_buf(),
                seed: Some(4),
                ..GeneratorCfg::default()
            })
            .unwrap();
            gen.generate_all_to(&mut progress).unwrap();
        });
        let logs = logs.text();
        assert_eq!(logs.matches("generated").count(), 5, "{logs}");
        let progress = String::from_utf8(progress).unwrap();
        assert_eq!(progress.lines().count(), 10);
        assert!(progress
            .lines()
            .all(|l| l.starts_with("Start generating ") || l.starts_with("Finished generating ")));
        assert!(!progress.contains("generated"));
    }
}
