use optparse::{Action, Flag, FlagGroup, OptionParser, SUPPRESS_HELP};

fn main() {
    let parser = OptionParser::new()
        .usage("%prog [options] FILE...")
        .description("Compress or decompress FILE(s) in place.")
        .epilog("Exit status is 0 on success and 1 on a usage error.")
        .add(
            Flag::new(["-d", "--decompress"])
                .action(Action::StoreTrue)
                .help("decompress instead of compressing"),
        )
        .add(
            Flag::new(["-l", "--level"])
                .choices(["1", "2", "3", "4", "5", "6", "7", "8", "9"])
                .default("6")
                .help("compression level [default: %default]"),
        )
        .add(
            Flag::new(["--trace"])
                .action(Action::StoreTrue)
                .help(SUPPRESS_HELP),
        )
        .group(
            FlagGroup::new("Output Options")
                .description("These control where the result is written, and whether the input is kept.")
                .add(
                    Flag::new(["-c", "--stdout"])
                        .action(Action::StoreTrue)
                        .help("write on standard output, keep original files unchanged"),
                )
                .add(
                    Flag::new(["-k", "--keep"])
                        .action(Action::StoreTrue)
                        .help("keep (don't delete) input files"),
                )
                .add(
                    Flag::new(["-S", "--suffix"])
                        .default(".gz")
                        .help("use suffix SUFFIX on compressed files"),
                ),
        )
        .build();

    let parsed = parser.parse();
    let values = parsed.values();
    let mode = if values.get_flag("decompress") {
        "decompress"
    } else {
        "compress"
    };

    for file in parsed.args() {
        println!(
            "{mode} {file} (level {}, suffix {}, keep: {}, stdout: {})",
            values.get("level").unwrap_or_default(),
            values.get("suffix").unwrap_or_default(),
            values.get_flag("keep"),
            values.get_flag("stdout"),
        );
    }
}
