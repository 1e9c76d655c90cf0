//! `wtcli` answers [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/)
//! window type queries from the command line. EWMH compliant clients declare what kind of
//! window they are mapping by setting the `_NET_WM_WINDOW_TYPE` property and `wtcli` reads
//! that declaration back for scripts, hot key bindings and panel configurations that need
//! to treat desktop background windows differently from everything else.
//!
//! ## Command line examples
//!
//! ### Print a window's type
//! Print the printable name of the window's declared type atom, or `none` when the window
//! doesn't declare one.
//! ```bash
//! wtcli type 0x2e00005
//! ```
//!
//! ### Check for a desktop window
//! Exit zero only when the window declares the desktop background type.
//! ```bash
//! wtcli desktop 0x2e00005 && echo "leave it alone"
//! ```
//!
//! ### Query a specific display
//! ```bash
//! wtcli type 48234501 --display :1
//! ```
use clap::{crate_description, crate_version, Arg, ArgMatches, Command};
use gory::*;
use libwintype::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use witcher::prelude::*;

fn cli() -> Command {
    Command::new("wtcli")
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .version(crate_version!())
        .arg(
            Arg::new("display")
                .long("display")
                .global(true)
                .value_name("DISPLAY")
                .help("X11 display to connect to, defaults to $DISPLAY"),
        )
        .subcommand(
            Command::new("type")
                .visible_alias("t")
                .about("Print a window's EWMH window type")
                .arg(Arg::new("WINDOW").required(true).help("Window id as decimal or 0x prefixed hex")),
        )
        .subcommand(
            Command::new("desktop")
                .visible_alias("d")
                .about("Succeed only when the window is a desktop background window")
                .arg(Arg::new("WINDOW").required(true).help("Window id as decimal or 0x prefixed hex")),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let matches = cli().get_matches();
    let display_opt = matches.get_one::<String>("display").map(|x| x.as_str());
    debug!("display: {:?}", display_opt);
    match matches.subcommand() {
        Some(("type", sub)) => print_type(display_opt, window_arg(sub)?),
        Some(("desktop", sub)) => check_desktop(display_opt, window_arg(sub)?),
        _ => unreachable!(),
    }
}

// Window ids come in as decimal or 0x prefixed hex, the two notations xwininfo and
// xdotool hand out
fn window_arg(matches: &ArgMatches) -> Result<u32> {
    let arg = matches.get_one::<String>("WINDOW").map(|x| x.as_str()).unwrap_or_default();
    parse_window_id(arg).wrap("failed to parse the window id")
}

fn print_type(display: Option<&str>, win: u32) -> Result<()> {
    match libwintype::classify(display, win) {
        Some(name) => println!("{}", name),
        None => println!("{}", "none".red()),
    }
    Ok(())
}

fn check_desktop(display: Option<&str>, win: u32) -> Result<()> {
    let classifier = Classifier::connect(display).wrap("failed to connect to the X11 server")?;
    if classifier.win_type(win).map(|typ| typ.is_desktop()).unwrap_or(false) {
        println!("{}", "desktop".green());
        Ok(())
    } else {
        println!("{}", "not a desktop window".red());
        std::process::exit(1);
    }
}
