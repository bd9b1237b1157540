#![deny(missing_docs)]
//! uxaudit command-line interface.
//!
//! Walks the page and component manifest, analyses each entry in order, and
//! writes the UI/UX report.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use uxaudit_core::{
    DesignTokenSource, ItemAnalysis, ItemFailure, JsonDesignTokens, Manifest, ManifestEntry,
    REPORT_FILE_NAME, StaticDesignTokens, StdFileSystem, UiUxAgent, UxAgent, UxReport,
    analyze_critical_component, analyze_mobile, analyze_page, generate_style_guide, render_json,
    render_report_markdown, report_schema_json,
};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

type DefaultAgent = UiUxAgent<StdFileSystem, Box<dyn DesignTokenSource>>;

#[derive(Parser)]
#[command(name = "uxaudit", version, about = "UI/UX analysis of the adoption site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    report: OutputArgs,
}

#[derive(Args, Clone)]
struct ProjectArgs {
    /// Project root that manifest paths are resolved against.
    #[arg(long, env = "UXAUDIT_ROOT", default_value = ".", global = true)]
    root: PathBuf,
    /// JSON design-token file, relative to the root.
    #[arg(long, env = "UXAUDIT_TOKENS", global = true)]
    tokens: Option<PathBuf>,
    /// JSON manifest replacing the built-in page and component lists.
    #[arg(long, env = "UXAUDIT_MANIFEST")]
    manifest: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Encoding of the report file.
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
    /// Where to write the report.
    #[arg(short, long, env = "UXAUDIT_OUTPUT", default_value = REPORT_FILE_NAME)]
    output: PathBuf,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the design-system style guide.
    StyleGuide {
        /// Write the guide to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the OpenAPI schema of the JSON report payload.
    Schema,
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let agent = build_agent(&cli.project);

    match cli.command {
        None => {
            let manifest = load_manifest(cli.project.manifest.as_deref()).await?;
            let report = run_analysis(&agent, &manifest, &cli.project.root);
            emit_report(&report, &cli.report).await?;
            println!("\n📄 Reporte guardado en {}", cli.report.output.display());
            for line in summary_lines(&report) {
                println!("{line}");
            }
        }
        Some(Commands::StyleGuide { output }) => {
            run_style_guide(&agent, &cli.project.root, output.as_deref()).await?;
        }
        Some(Commands::Schema) => {
            println!("{}", report_schema_json()?);
        }
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

fn build_agent(project: &ProjectArgs) -> DefaultAgent {
    let tokens: Box<dyn DesignTokenSource> = match &project.tokens {
        Some(path) => Box::new(JsonDesignTokens::new(StdFileSystem::new(), path.clone())),
        None => Box::new(StaticDesignTokens),
    };
    UiUxAgent::new(StdFileSystem::new(), project.root.clone(), tokens)
}

async fn load_manifest(path: Option<&Path>) -> CliResult<Manifest> {
    let Some(path) = path else {
        return Ok(Manifest::default());
    };
    let contents = tokio::fs::read_to_string(path).await?;
    let manifest = Manifest::from_json(&contents)?;
    log::info!(
        "loaded manifest {} ({} pages, {} components)",
        path.display(),
        manifest.pages.len(),
        manifest.components.len()
    );
    Ok(manifest)
}

/// Sequential run over the manifest. Per-item failures are recorded, never fatal.
fn run_analysis<A: UxAgent + ?Sized>(agent: &A, manifest: &Manifest, root: &Path) -> UxReport {
    let mut failures = Vec::new();

    println!("🔍 Analizando páginas públicas...");
    let pages = analyze_entries(agent, &manifest.pages, analyze_page::<A>, &mut failures);

    println!("\n🧩 Analizando componentes críticos...");
    let components = analyze_entries(
        agent,
        &manifest.components,
        analyze_critical_component::<A>,
        &mut failures,
    );

    println!("\n🎨 Analizando sistema de diseño...");
    let design_system = match agent.analyze_design_system(root) {
        Ok(analysis) => {
            println!("  ✅ Sistema de diseño ({}/100)", analysis.score);
            Some(analysis)
        }
        Err(err) => {
            println!("  ❌ Sistema de diseño");
            log::error!("design system analysis failed: {err}");
            failures.push(ItemFailure {
                name: "design-system".to_string(),
                message: err.to_string(),
            });
            None
        }
    };

    println!("\n📱 Analizando experiencia móvil...");
    let mobile = analyze_mobile(agent, &manifest.mobile_paths);
    println!("  ✅ Experiencia móvil ({}/100)", mobile.score);

    UxReport::assemble(
        root.display().to_string(),
        pages,
        components,
        design_system,
        mobile,
        failures,
    )
}

fn analyze_entries<A: UxAgent + ?Sized>(
    agent: &A,
    entries: &[ManifestEntry],
    analyze: impl Fn(&A, &ManifestEntry) -> uxaudit_core::Result<ItemAnalysis>,
    failures: &mut Vec<ItemFailure>,
) -> Vec<ItemAnalysis> {
    let mut analyses = Vec::new();
    for entry in entries {
        match analyze(agent, entry) {
            Ok(analysis) => {
                match analysis.score {
                    Some(score) => println!("  ✅ {} ({score}/100)", entry.name),
                    None => println!("  ✅ {}", entry.name),
                }
                analyses.push(analysis);
            }
            Err(err) => {
                println!("  ❌ {}", entry.name);
                log::error!("analysis failed for {} ({}): {err}", entry.name, entry.path);
                failures.push(ItemFailure {
                    name: entry.name.clone(),
                    message: err.to_string(),
                });
            }
        }
    }
    analyses
}

async fn run_style_guide<A: UxAgent + ?Sized>(
    agent: &A,
    root: &Path,
    output: Option<&Path>,
) -> CliResult<()> {
    let analysis = agent.analyze_design_system(root)?;
    let guide = generate_style_guide(&analysis);
    match output {
        Some(path) => write_file(path, guide).await,
        None => {
            print!("{guide}");
            Ok(())
        }
    }
}

async fn emit_report(report: &UxReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Markdown => render_report_markdown(report),
        OutputFormat::Json => render_json(report)?,
    };
    write_file(&output.output, contents).await
}

async fn write_file(path: &Path, contents: String) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

fn summary_lines(report: &UxReport) -> Vec<String> {
    let mut lines = vec![
        "\n📊 Resumen del análisis".to_string(),
        format!("  Páginas analizadas: {}", report.pages.len()),
        format!("  Componentes analizados: {}", report.components.len()),
        format!("  Problemas críticos: {}", report.critical_issue_count()),
        format!(
            "  Recomendaciones totales: {}",
            report.total_recommendations()
        ),
        format!("  Puntuación general: {}/100", report.overall_score),
    ];
    if !report.failures.is_empty() {
        lines.push(format!("  Elementos omitidos: {}", report.failures.len()));
    }
    lines
}
