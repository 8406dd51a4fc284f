//! Subcommand execution.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use builder_core::{Command, Editor, ElementKind, GeneratedCode, Outcome};

use crate::{CliCommand, CliConfig, MARKUP_FILE, STYLESHEET_FILE};

/// Result of running a subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Plain listing text.
    Listing(String),
    /// Generated page.
    Code(GeneratedCode),
}

/// Runs one subcommand against a fresh editor.
#[derive(Debug)]
pub struct App {
    config: CliConfig,
}

impl App {
    /// Create an app for the given configuration.
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Run the configured subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails, the preset is
    /// unknown, or the script cannot be read or parsed.
    pub fn run(&self) -> anyhow::Result<Output> {
        let mut editor = Editor::new(self.config.editor_config()?);

        match &self.config.command {
            CliCommand::Kinds => Ok(Output::Listing(self.kinds_listing()?)),
            CliCommand::Presets => Ok(Output::Listing(self.presets_listing(&editor)?)),
            CliCommand::Render { preset } => {
                let preset = editor.presets().find(preset)?;
                editor.instantiate_from_preset(preset.name);
                tracing::info!(
                    "Rendering {:?} with {} elements",
                    preset.name,
                    editor.elements().len()
                );
                Ok(Output::Code(editor.generate()))
            }
            CliCommand::Run { script } => {
                run_script(&mut editor, script)?;
                Ok(Output::Code(editor.generate()))
            }
        }
    }

    /// Write an output to stdout or to the configured directory.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn emit(&self, output: &Output, stdout: &mut impl Write) -> anyhow::Result<()> {
        match (output, &self.config.out_dir) {
            (Output::Listing(text), _) => {
                writeln!(stdout, "{text}")?;
            }
            (Output::Code(code), Some(dir)) => write_site(code, dir)?,
            (Output::Code(code), None) => {
                writeln!(stdout, "{}", code.markup)?;
                writeln!(stdout)?;
                writeln!(stdout, "{}", code.stylesheet)?;
            }
        }
        Ok(())
    }

    fn kinds_listing(&self) -> anyhow::Result<String> {
        if self.config.json {
            let entries: Vec<_> = ElementKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "kind": kind,
                        "label": kind.label(),
                        "icon": kind.icon(),
                        "properties": kind.schema().iter().map(|s| s.key).collect::<Vec<_>>(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&entries)?);
        }

        let mut out = String::new();
        for kind in ElementKind::ALL {
            let _ = writeln!(
                out,
                "{} {:<10} {:<15} {} properties",
                kind.icon(),
                kind.name(),
                kind.label(),
                kind.schema().len()
            );
        }
        Ok(out.trim_end().to_string())
    }

    fn presets_listing(&self, editor: &Editor) -> anyhow::Result<String> {
        let summaries = editor.presets().summaries();
        if self.config.json {
            return Ok(serde_json::to_string_pretty(&summaries)?);
        }

        let mut out = String::new();
        for summary in summaries {
            let _ = writeln!(
                out,
                "{} {:<20} {} elements",
                summary.icon, summary.name, summary.element_count
            );
        }
        Ok(out.trim_end().to_string())
    }
}

/// Replay a command script against the editor.
fn run_script(editor: &mut Editor, path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let commands = Command::parse_script(&json)
        .with_context(|| format!("Invalid script {}", path.display()))?;

    let total = commands.len();
    let mut ignored = 0usize;
    for (index, command) in commands.into_iter().enumerate() {
        let outcome = editor.execute(command);
        tracing::debug!("Command {index}: {outcome:?}");
        if outcome == Outcome::Ignored {
            ignored += 1;
        }
    }

    if ignored > 0 {
        tracing::warn!("{ignored} of {total} commands had no effect");
    }
    tracing::info!(
        "Replayed {total} commands, {} elements on canvas",
        editor.elements().len()
    );
    Ok(())
}

fn write_site(code: &GeneratedCode, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    for (name, contents) in [(MARKUP_FILE, &code.markup), (STYLESHEET_FILE, &code.stylesheet)] {
        let path = dir.join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(command: CliCommand) -> App {
        App::new(CliConfig::new(command))
    }

    fn code(output: Output) -> GeneratedCode {
        match output {
            Output::Code(code) => code,
            Output::Listing(text) => panic!("expected generated code, got listing {text}"),
        }
    }

    #[test]
    fn kinds_lists_every_kind() {
        let Output::Listing(text) = app(CliCommand::Kinds).run().expect("runs") else {
            panic!("expected listing");
        };
        assert_eq!(text.lines().count(), 12);
        assert!(text.contains("navbar"));
        assert!(text.contains("Hero Section"));
    }

    #[test]
    fn presets_json_listing() {
        let mut config = CliConfig::new(CliCommand::Presets);
        config.json = true;
        let Output::Listing(text) = App::new(config).run().expect("runs") else {
            panic!("expected listing");
        };
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(value.as_array().map(Vec::len), Some(4));
        assert_eq!(value[2]["name"], "Grid Layout");
        assert_eq!(value[2]["element_count"], 4);
    }

    #[test]
    fn render_preset_uses_background_override() {
        let mut config = CliConfig::new(CliCommand::Render {
            preset: "grid layout".to_string(),
        });
        config.background = Some("#abcdef".to_string());
        let code = code(App::new(config).run().expect("runs"));
        assert!(code.markup.contains("Card 3"));
        assert!(code.stylesheet.contains("background-color: #abcdef;"));
    }

    #[test]
    fn render_unknown_preset_fails() {
        let result = app(CliCommand::Render {
            preset: "Masonry".to_string(),
        })
        .run();
        assert!(result.is_err());
    }

    #[test]
    fn run_script_and_write_site() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = dir.path().join("page.json");
        std::fs::write(
            &script,
            r#"[
                {"op": "instantiate_from_palette", "kind": "heading", "x": 120, "y": 80},
                {"op": "set_property", "id": "$last", "key": "text", "value": "Camp Days"},
                {"op": "delete", "id": "00000000-0000-0000-0000-000000000000"}
            ]"#,
        )
        .expect("write script");

        let mut config = CliConfig::new(CliCommand::Run { script });
        let out_dir = dir.path().join("site");
        config.out_dir = Some(out_dir.clone());
        let app = App::new(config);

        let output = app.run().expect("runs");
        let mut stdout = Vec::new();
        app.emit(&output, &mut stdout).expect("emits");

        assert!(stdout.is_empty());
        let markup = std::fs::read_to_string(out_dir.join(MARKUP_FILE)).expect("markup written");
        let stylesheet =
            std::fs::read_to_string(out_dir.join(STYLESHEET_FILE)).expect("stylesheet written");
        assert!(markup.contains("left: 70px; top: 55px;"));
        assert!(markup.contains(">Camp Days</h1>"));
        assert!(stylesheet.starts_with("/* Summer Camp Creation Styles */"));
    }

    #[test]
    fn invalid_script_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = dir.path().join("broken.json");
        std::fs::write(&script, r#"[{"op": "launch"}]"#).expect("write script");

        let err = app(CliCommand::Run { script }).run().expect_err("invalid");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn emit_code_to_stdout() {
        let app = app(CliCommand::Render {
            preset: "Hero Image Layout".to_string(),
        });
        let output = app.run().expect("runs");
        let mut stdout = Vec::new();
        app.emit(&output, &mut stdout).expect("emits");

        let text = String::from_utf8(stdout).expect("utf8");
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("</html>\n\n/* Summer Camp Creation Styles */"));
    }
}
