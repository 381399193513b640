use codecraft::{
    cli::{get_log_level_from_verbose, parse_cli, run_create, run_new, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let log_level = get_log_level_from_verbose(cli.command.verbose());
    env_logger::Builder::new().filter_level(log_level).init();

    let result = match cli.command {
        Commands::Create(args) => run_create(args),
        Commands::New(args) => run_new(args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
