use haptic_hand::{
    parse_assignments, render, HandError, JsonLinesSource, Pose, PoseSource, Result, SvgWriter,
    WristSmoother,
};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

const USAGE: &str = "hand-demo [field=value ...] [--stream] [--smooth] [--out FILE]

Renders the hand as SVG. Fields: wrist_yaw wrist_pitch wrist_roll thumb index middle ring pinky.
With --stream, reads one JSON pose per line from stdin and writes one SVG per frame,
separated by form feeds. --smooth eases the wrist between frames at 60 fps.";

const FRAME_DT: f32 = 1.0 / 60.0;

struct Options {
    assignments: Vec<String>,
    stream: bool,
    smooth: bool,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Options>> {
    let mut options = Options {
        assignments: Vec::new(),
        stream: false,
        smooth: false,
        out: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--stream" => options.stream = true,
            "--smooth" => options.smooth = true,
            "--out" | "-o" => {
                let path = args
                    .next()
                    .ok_or_else(|| HandError::usage("--out needs a file name"))?;
                options.out = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => {
                return Err(HandError::usage(format!("unknown option {flag}")));
            }
            _ => options.assignments.push(arg),
        }
    }
    Ok(Some(options))
}

fn render_once(pose: &Pose, writer: &SvgWriter, out: &mut dyn Write) -> Result<()> {
    out.write_all(writer.render_to_string(&render(pose)).as_bytes())?;
    Ok(())
}

fn run_stream(
    options: &Options,
    base: Pose,
    writer: &SvgWriter,
    out: &mut dyn Write,
) -> Result<()> {
    let stdin = io::stdin();
    let mut source = JsonLinesSource::new(stdin.lock());
    let mut smoother = WristSmoother::new(&base);
    let mut frames = 0usize;

    while let Some(frame) = source.next_pose() {
        let target = match frame {
            Ok(pose) => pose,
            Err(e @ HandError::Io(_)) => return Err(e),
            Err(e) => {
                log::warn!("skipping frame: {e}");
                continue;
            }
        };
        let shown = if options.smooth {
            smoother.update(&target, FRAME_DT)
        } else {
            target
        };
        if frames > 0 {
            out.write_all(b"\x0c\n")?;
        }
        render_once(&shown, writer, out)?;
        frames += 1;
    }

    log::info!("rendered {frames} frames from {} lines", source.line());
    Ok(())
}

fn run() -> Result<()> {
    let Some(options) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let base = parse_assignments(
        Pose::DEFAULT,
        options.assignments.iter().map(String::as_str),
    )?;
    log::debug!("base pose {:?}", base);

    let writer = SvgWriter::default();
    let mut out: Box<dyn Write> = match &options.out {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if options.stream {
        run_stream(&options, base, &writer, &mut out)?;
    } else {
        render_once(&base, &writer, &mut out)?;
    }
    out.flush()?;

    if let Some(path) = &options.out {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("hand-demo: {e}");
        std::process::exit(1);
    }
}
