use beztrace::session::{InputEvent, Session};
use beztrace::svg::{composite, SvgProvider};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut session =
        Session::new(SvgProvider, 640, 480).expect("svg surfaces cannot fail to allocate");
    session
        .handle(InputEvent::RandomizePoints)
        .expect("only resizes can fail");

    // fixed timestep, the demo has no real frame scheduler
    let mut frames = 1;
    while session.step(1.0 / 60.0) {
        frames += 1;
    }
    log::info!(
        "traced a degree {} curve in {} frames",
        session.points().degree(),
        frames
    );

    println!("{}", composite(session.construction(), session.trace()));
}
