use optparse::{Action, Flag, OptionParser, ValueType};

fn main() {
    let parser = OptionParser::new()
        .usage("%prog [options] SOURCE... DEST")
        .version("%prog 0.1.0")
        .description("Copy SOURCE to DEST, or multiple SOURCE(s) to a directory.")
        .add(
            Flag::new(["-r", "--recursive"])
                .action(Action::StoreTrue)
                .help("copy directories recursively"),
        )
        .add(
            Flag::new(["-v", "--verbose"])
                .action(Action::Count)
                .help("explain what is being done (repeat for more detail)"),
        )
        .add(
            Flag::new(["--backup"])
                .choices(["none", "numbered", "existing", "simple"])
                .default("existing")
                .metavar("CONTROL")
                .help("make a backup of each existing destination file [default: %default]"),
        )
        .add(
            Flag::new(["-j", "--jobs"])
                .value_type(ValueType::Int)
                .default("1")
                .help("copy with N workers"),
        )
        .build();

    let parsed = parser.parse();
    let values = parsed.values();

    let jobs: u32 = values.get_as("jobs").and_then(Result::ok).unwrap_or(1);

    match parsed.args().split_last() {
        Some((destination, sources)) if !sources.is_empty() => {
            println!("recursive: {}", values.get_flag("recursive"));
            println!("verbosity: {}", values.get("verbose").unwrap_or("0"));
            println!("backup: {}", values.get("backup").unwrap_or_default());
            println!("jobs: {jobs}");
            println!("{} -> {destination}", sources.join(", "));
        }
        _ => {
            eprint!("{}", parser.format_help());
            std::process::exit(1);
        }
    }
}
