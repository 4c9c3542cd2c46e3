use clap::Parser;

use rigctl::app::RigApp;
use rigctl::control::ChannelSender;
use rigctl::models::RigState;

/// Control surface for a single hanging-light rig
#[derive(Parser, Debug)]
#[command(name = "rigctl", version, about)]
struct Args {
    /// Rig identifier, shown as a two-digit label
    #[arg(long, default_value_t = 0)]
    id: u32,
    /// Initial rope position in centimeters
    #[arg(long, default_value_t = 100.0)]
    position: f64,
    /// Initial range-sensor distance in centimeters
    #[arg(long, default_value_t = 100.0)]
    distance: f64,
}

fn main() {
    // Prefer C numeric locale up-front; GTK may later adjust locale again.
    std::env::set_var("LC_NUMERIC", "C");
    unsafe {
        libc::setlocale(libc::LC_NUMERIC, b"C\0".as_ptr().cast());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rigctl=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let (sender, outbound) = ChannelSender::new();

    // The connection layer owns this end of the queue; log the traffic.
    std::thread::spawn(move || {
        while let Ok(message) = outbound.recv() {
            tracing::info!(
                "-> rig {:02} {} {:?}",
                message.rig_id,
                message.topic,
                message.payload
            );
        }
    });

    let app = RigApp::new(
        RigState::new(args.id, args.position, args.distance),
        sender,
    );
    std::process::exit(app.run());
}
