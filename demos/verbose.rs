use pennant::FlagSet;

fn main() {
    let mut verbose: bool = false;
    let mut dry_run: bool = false;
    let mut flags = FlagSet::new("verbose");
    flags
        .bool_var_p(&mut verbose, "verbose", "v", false, "Print more.")
        .unwrap();
    flags
        .bool_var(&mut dry_run, "dry-run", false, "Do nothing.")
        .unwrap();
    flags.parse();
    let files = flags.args().to_vec();
    drop(flags);

    println!("verbose: {verbose}");
    println!("dry-run: {dry_run}");
    println!("files: {files:?}");
}
