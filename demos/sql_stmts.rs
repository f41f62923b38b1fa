use std::env;
use std::fs;

use pgsql_splitter::Statements;

/// Split specified files and print all statements.
fn main() {
    env_logger::init();
    let args = env::args();
    for arg in args.skip(1) {
        let sql = fs::read_to_string(&arg).unwrap();
        for (i, stmt) in Statements::new(&sql).enumerate() {
            println!("{}[{}]:", arg, i);
            println!("{}", stmt);
        }
    }
}
