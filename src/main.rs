use std::env;
use std::error::Error;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use momentum_mlp::{
    ActivationFn,
    CompletionFn,
    NetConfig,
    PreparedDataSet,
    Trainer,
    TrainerOptionsBuilder,
    TrainingResult,
};

const SEED: u32 = 4;

/// Without arguments, trains the XOR problem. With
/// `<csv path> <input columns> <output columns> [hidden units]` (columns comma
/// separated), trains on the CSV file instead.
fn main() -> Result<(), Box<dyn Error>> {

    let args: Vec<String> = env::args().skip(1).collect();

    let (mut data_set, hidden_units) = match args.len() {
        0 => (xor_data_set()?, 2),
        3 | 4 => {
            let independent_columns: Vec<&str> = args[1].split(',').collect();
            let dependent_columns: Vec<&str> = args[2].split(',').collect();
            let hidden_units = match args.get(3) {
                Some(units) => units.parse::<usize>()?,
                None => independent_columns.len() * 2,
            };
            (PreparedDataSet::from_csv(&args[0], independent_columns, dependent_columns)?, hidden_units)
        },
        _ => {
            eprintln!("usage: momentum_mlp [<csv path> <input columns> <output columns> [hidden units]]");
            std::process::exit(2);
        },
    };

    if args.len() > 0 {
        data_set.shuffle(&mut XorShiftRng::seed_from_u64(SEED as u64));
    }

    let net = NetConfig::new_fully_connected(
        data_set.independent_cols(),
        data_set.dependent_cols(),
        vec![hidden_units],
        ActivationFn::Tanh
    ).create_net()?;

    let options = TrainerOptionsBuilder::default()
        .seed(SEED)
        .build()?;

    let mut trainer = Trainer::new(net, options);

    let result: TrainingResult = trainer.train(
        &data_set,
        CompletionFn::stop_after_epoch(1024).with_target_error(0.01)
    )?;

    println!(
        "epochs = {}, duration = {}s, error_stats = {:?}",
        result.epochs,
        result.duration.as_secs_f64(),
        &result.error_stats
    );

    for (input, expected) in &data_set {
        let output = trainer.forward(input)?;
        println!("{:?} -> {:?} (expected {:?})", input, output, expected);
    }

    Ok(())

}

fn xor_data_set() -> Result<PreparedDataSet, Box<dyn Error>> {
    Ok(PreparedDataSet::from_pairs(vec![
        ([0.0, 0.0], [0.0]),
        ([1.0, 0.0], [1.0]),
        ([0.0, 1.0], [1.0]),
        ([1.0, 1.0], [0.0]),
    ])?)
}
