use anyhow::{Context, Result};
use hateoas_greeting_server::server::{run, AppData};
use log::info;
use std::net::TcpListener;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "hateoas-greeting-server",
    about = "Greet people, with a link back to the greeting"
)]
struct Opt {
    /// Server host
    #[structopt(
        short = "H",
        long,
        default_value = "localhost",
        env = "HATEOAS_GREETING_HOST"
    )]
    host: String,
    /// Server port
    #[structopt(short = "P", long, default_value = "8080", env = "HATEOAS_GREETING_PORT")]
    port: u16,
    /// Allowed CORS origin, `*` for any
    #[structopt(long, default_value = "*", env = "HATEOAS_GREETING_CORS_ORIGIN")]
    cors_origin: String,
    /// Sentry DSN, errors are not reported when missing
    #[structopt(long, env = "HATEOAS_GREETING_SENTRY_DSN")]
    sentry_dsn: Option<String>,
}

fn init_sentry(dsn: Option<&str>) -> Result<Option<sentry::ClientInitGuard>> {
    let dsn = match dsn {
        Some(dsn) => dsn,
        None => return Ok(None),
    };

    let dsn: sentry::types::Dsn = dsn.parse().context("Invalid sentry DSN")?;

    Ok(Some(sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        ..Default::default()
    })))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_backtrace::install();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or("actix_web=info,hateoas_greeting_server=info"),
    )
    .init();

    let opt = Opt::from_args();

    let _sentry = init_sentry(opt.sentry_dsn.as_deref())?;

    let listener = TcpListener::bind((opt.host.as_str(), opt.port))
        .with_context(|| format!("Cannot listen on {}:{}", opt.host, opt.port))?;

    info!("Listening on {}", listener.local_addr()?);

    run(
        listener,
        AppData {
            cors_origin: opt.cors_origin,
        },
    )?
    .await?;

    Ok(())
}
