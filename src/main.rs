use aulas::Dispatcher;
use env_logger::Env;
use std::io;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let code = Dispatcher::default().main(None, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
