use std::io::{self, BufWriter};
use std::process::ExitCode;

use dirtree::cli::Cli;
use dirtree::fs::RealFileSystem;
use dirtree::TreeRenderer;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            // --help goes to stdout and is not a failure.
            err.0.print().ok();
            return if err.0.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let renderer = TreeRenderer::new(RealFileSystem, cli.walk_options());
    let mut out = BufWriter::new(io::stdout().lock());

    match renderer.render(&mut out, &cli.path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(out);
            eprintln!("dirtree: {err}");
            ExitCode::from(1)
        }
    }
}
