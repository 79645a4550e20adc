use std::{
    fs::OpenOptions,
    io::{stdin, stdout, Read, Write},
};

use clap::{value_parser, Arg, ArgAction, Command};

use moss::{from_path, from_string, Options};

fn cli() -> Command {
    Command::new("moss")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for an indentation-based CSS superset")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true),
        )
        .arg(
            Arg::new("STDIN")
                .action(ArgAction::SetTrue)
                .long("stdin")
                .help("Read the stylesheet from stdin"),
        )
        .arg(
            Arg::new("INDENT_WIDTH")
                .long("indent-width")
                .help("Number of spaces used when indenting emitted declarations")
                .default_value("4")
                .num_args(1)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
        .arg(
            Arg::new("INPUT")
                .value_parser(value_parser!(String))
                .required_unless_present("STDIN")
                .help("Input file"),
        )
        .arg(Arg::new("OUTPUT").help("Output CSS file"))
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let options = &Options::default()
        .quiet(matches.get_flag("QUIET"))
        .indent_width(*matches.get_one::<usize>("INDENT_WIDTH").unwrap());

    let (mut stdout_write, mut file_write);
    let buf_out: &mut dyn Write = if let Some(path) = matches.get_one::<String>("OUTPUT") {
        file_write = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        &mut file_write
    } else {
        stdout_write = stdout();
        &mut stdout_write
    };

    buf_out.write_all(
        if let Some(name) = matches.get_one::<String>("INPUT") {
            from_path(name, options)
        } else if matches.get_flag("STDIN") {
            from_string(
                {
                    let mut buffer = String::new();
                    stdin().read_to_string(&mut buffer)?;
                    buffer
                },
                options,
            )
        } else {
            unreachable!()
        }
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            if let Some(loc) = e.location() {
                eprintln!(
                    "    ./{}:{}:{}",
                    loc.file.name(),
                    loc.begin.line + 1,
                    loc.begin.column + 1
                );
            }
            std::process::exit(1)
        })
        .as_bytes(),
    )?;
    Ok(())
}
