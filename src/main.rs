use argh::FromArgs;
use std::path::PathBuf;
use tracing::info;
use turtle_commands::Interpreter;
use turtle_commands::command::Canvas;
use turtle_commands::io_adapters::{Scene, TerminalConsole, TextCanvas};

#[derive(FromArgs)]
/// Drive drawing turtles with line commands read from files, then from the keyboard.
struct Args {
    #[argh(switch)]
    /// don't read commands interactively after the files
    no_interactive: bool,

    #[argh(switch)]
    /// print every drawn line to standard output
    draw_log: bool,

    #[argh(positional, greedy)]
    /// command files, executed in order
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    turtle_commands::logging::init();
    let args: Args = argh::from_env();

    let scene = Scene::new();
    let handle = scene.handle();
    let canvas: Box<dyn Canvas> = if args.draw_log {
        Box::new(TextCanvas::stdout())
    } else {
        Box::new(scene)
    };

    let mut interp = Interpreter::new(canvas, Box::new(TerminalConsole));
    interp.run_files(args.files.as_slice());
    if !args.no_interactive && !interp.should_exit() {
        interp.repl()?;
    }

    let view = handle.view();
    info!(
        turtles = interp.registry().len(),
        lines = handle.segments().len(),
        x = view.x,
        y = view.y,
        width = view.width,
        height = view.height,
        "done"
    );
    Ok(())
}
