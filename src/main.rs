use cardlet::prelude::*;

fn main() {
    env_logger::init();

    let result = Presentation::new()
        .with_scenes(default_scenes())
        .with_title("a little something for you")
        .run();

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
