use sober_counter::args::{Args, Mode};
use sober_counter::gui::run_gui;
use sober_counter::terminal::run_terminal;

fn main() {
    let Some(args) = Args::parse() else {
        return;
    };

    let default_level = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match args.mode {
        Mode::Terminal => {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("❌ Failed to start runtime: {e}");
                    std::process::exit(1);
                }
            };
            let result = rt.block_on(async move {
                let mut stdout = std::io::stdout();
                run_terminal(&mut stdout, args.variant, args.max_ticks).await
            });
            if let Err(e) = result {
                log::error!("Counter stopped: {e}");
                std::process::exit(1);
            }
        }
        Mode::Gui => {
            println!("🚀 Launching Sober Counter (variant='{}')...", args.variant);
            run_gui(args.variant);
        }
    }
}
