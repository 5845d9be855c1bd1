use std::fs;
use std::path::PathBuf;

use narrative_rs::api::{NarrativeConfig, NarrativeEngine};
use narrative_rs::core::{ContainerRect, ScrollMetrics};
use narrative_rs::interaction::{DragState, PointerSample, TouchPoint};
use narrative_rs::render::{HudReadout, NullRenderer};
use serde::{Deserialize, Serialize};

const USAGE: &str = "usage: narrative_trace_tool <scroll|drag> [--records <path>] [--config <path>] --input <path> --output <path>";

#[derive(Debug, Deserialize)]
struct ScrollTraceFile {
    steps: Vec<ScrollMetrics>,
}

#[derive(Debug, Serialize)]
struct ScrollTraceStep {
    metrics: ScrollMetrics,
    fraction: f64,
    active_year: Option<i32>,
    hud: HudReadout,
}

#[derive(Debug, Serialize)]
struct ScrollTraceOutput {
    records_len: usize,
    steps: Vec<ScrollTraceStep>,
}

#[derive(Debug, Deserialize)]
struct DragTraceFile {
    #[serde(default)]
    container: Option<ContainerRect>,
    events: Vec<DragTraceEvent>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum DragTraceEvent {
    PointerDown { client_x: f64 },
    PointerMove { client_x: f64 },
    PointerUp,
    PointerLeave,
    TouchStart,
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
}

#[derive(Debug, Serialize)]
struct DragTraceStep {
    event: DragTraceEvent,
    state: DragState,
}

#[derive(Debug, Serialize)]
struct DragTraceOutput {
    steps: Vec<DragTraceStep>,
}

#[derive(Debug, Clone, Copy)]
enum CommandKind {
    Scroll,
    Drag,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    records: Option<PathBuf>,
    config: Option<PathBuf>,
    input: PathBuf,
    output: PathBuf,
}

fn main() {
    let _ = narrative_rs::telemetry::init_tracing("narrative_rs=debug,warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let mut engine = build_engine(args.config.as_ref())?;
    match args.command {
        CommandKind::Scroll => {
            if let Some(records) = &args.records {
                engine.load_records_file(records);
            }
            let trace: ScrollTraceFile = read_json(&args.input)?;
            write_json(&args.output, &replay_scroll(&mut engine, trace))
        }
        CommandKind::Drag => {
            let trace: DragTraceFile = read_json(&args.input)?;
            write_json(&args.output, &replay_drag(&mut engine, trace))
        }
    }
}

fn build_engine(config: Option<&PathBuf>) -> Result<NarrativeEngine<NullRenderer>, String> {
    let config = match config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            NarrativeConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => NarrativeConfig::default(),
    };
    NarrativeEngine::new(NullRenderer::default(), config).map_err(|err| err.to_string())
}

fn replay_scroll(engine: &mut NarrativeEngine<NullRenderer>, trace: ScrollTraceFile) -> ScrollTraceOutput {
    let mut steps = Vec::with_capacity(trace.steps.len());
    for (index, metrics) in trace.steps.into_iter().enumerate() {
        if index == 0 {
            engine.mount(metrics);
        } else {
            engine.on_scroll(metrics);
        }
        steps.push(ScrollTraceStep {
            metrics,
            fraction: engine.scroll_fraction(),
            active_year: engine.active_year(),
            hud: engine.hud_readout(),
        });
    }
    ScrollTraceOutput {
        records_len: engine.records().len(),
        steps,
    }
}

fn replay_drag(engine: &mut NarrativeEngine<NullRenderer>, trace: DragTraceFile) -> DragTraceOutput {
    let rect = trace.container;
    let mut steps = Vec::with_capacity(trace.events.len());
    for event in trace.events {
        match &event {
            DragTraceEvent::PointerDown { client_x } => engine.comparison_pointer_down(*client_x, rect),
            DragTraceEvent::PointerMove { client_x } => engine.comparison_pointer_move(*client_x, rect),
            DragTraceEvent::PointerUp => engine.comparison_pointer_up(),
            DragTraceEvent::PointerLeave => engine.comparison_pointer_leave(),
            DragTraceEvent::TouchStart => engine.comparison_touch_start(),
            DragTraceEvent::TouchMove { touches } => {
                let sample = PointerSample::touch(touches.iter().copied());
                engine.comparison_touch_move(&sample, rect);
            }
            DragTraceEvent::TouchEnd => engine.comparison_touch_end(),
        }
        steps.push(DragTraceStep {
            event,
            state: engine.drag_state(),
        });
    }
    DragTraceOutput { steps }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &PathBuf) -> Result<T, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("scroll") => CommandKind::Scroll,
        Some("drag") => CommandKind::Drag,
        _ => return Err(USAGE.to_owned()),
    };

    let mut records = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--records" => &mut records,
            "--config" => &mut config,
            "--input" => &mut input,
            "--output" => &mut output,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        *slot = Some(PathBuf::from(value));
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        command,
        records,
        config,
        input,
        output,
    })
}
