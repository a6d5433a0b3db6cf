extern crate argparse;
extern crate fnv;
extern crate itertools;
extern crate rayon;

mod apriori;
mod command_line_args;
mod generate_rules;
mod item;
mod itemset;
mod rule_writer;
mod transaction_reader;

use apriori::frequent_itemsets;
use apriori::minimum_support_count;
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use generate_rules::generate_rules;
use rule_writer::write_rules;
use transaction_reader::read_transactions;

use std::error::Error;
use std::process;
use std::time::Instant;

fn mine_apriori(args: &Arguments) -> Result<(), Box<Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let transactions = read_transactions(&args.input_file_path)?;
    println!(
        "Loaded {} transactions in {} seconds.",
        transactions.len(),
        timer.elapsed().as_secs()
    );

    let min_count = minimum_support_count(args.min_support, transactions.len());

    println!("Mining frequent itemsets...");
    let timer = Instant::now();
    let levels = frequent_itemsets(&transactions, min_count);
    let num_itemsets: usize = levels.iter().map(|table| table.len()).sum();
    println!(
        "Apriori generated {} frequent itemsets up to size {} in {} seconds.",
        num_itemsets,
        levels.len(),
        timer.elapsed().as_secs()
    );

    println!("Generating rules...");
    let timer = Instant::now();
    let rules = generate_rules(&levels, transactions.len());
    println!(
        "Generated {} rules in {} seconds.",
        rules.len(),
        timer.elapsed().as_secs()
    );

    write_rules(&args.output_rules_path, &rules)?;

    println!("Total runtime: {} seconds", start.elapsed().as_secs());

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
