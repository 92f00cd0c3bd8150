mod command;
mod load;
mod logging;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    command::run()
}
