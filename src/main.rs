use clap::Parser;
use mesh_classifier::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the collection has already been printed
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Mesh Classifier - Community Mesh Node Classifier");
    println!("================================================");
    println!();
    println!("Read the community node export, keep installed nodes, and classify");
    println!("each one as a hub, supernode, or plain node.");
    println!();
    println!("USAGE:");
    println!("    mesh-classifier <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    classify    Classify the node export and print the collection");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Classify nodes.csv from the working directory:");
    println!("    mesh-classifier classify");
    println!();
    println!("    # Header-aware export, grouped by category:");
    println!("    mesh-classifier classify --input export.csv --skip-header --grouped");
    println!();
    println!("    # Emit the collection for the map:");
    println!("    mesh-classifier classify --format geojson");
    println!();
    println!("For detailed help, use:");
    println!("    mesh-classifier classify --help");
}
