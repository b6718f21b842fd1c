use mazestep::{
    Generator,
    app::{App, AppConfig},
};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());

    let app = App::new(AppConfig {
        rows: 64,
        cols: 64,
        generator: Generator::Prim,
        seed: Some(0),
        ..AppConfig::default()
    });
    let _guard = app.init_logging()?;
    app.profile(num_iters.unwrap_or(1))
}
