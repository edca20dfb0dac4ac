mod command;
mod store;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
