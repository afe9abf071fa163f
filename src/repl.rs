use std::io::{self, Write};

use calcforge::{new_engine, EvalConfig};

const BANNER: &str = r#"
 +---------------------+
 |  CalcForge          |
 |  [7][8][9]  [/][(]  |
 |  [4][5][6]  [*][)]  |
 |  [1][2][3]  [-][M]  |
 |  [0]        [+]     |
 +---------------------+
 :mem <n>  :history  :save <name>  :templates  :load <id>
 :undo  :eval  :rpn <expr>  :audit  :test  :clear
"#;

pub fn start(config: EvalConfig) {
    let mut engine = new_engine(config);
    println!("{}", BANNER);

    loop {
        print!(">>");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => return,
            Ok(_) => {}
            Err(err) => {
                eprintln!("could not read input: {}", err);
                return;
            }
        }

        if input.trim().is_empty() {
            continue;
        }

        match engine.run(&input) {
            Ok(output) => println!("{}", output),
            Err(err) => println!("error: {:#}", err),
        }
    }
}
