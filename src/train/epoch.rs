use std::time::SystemTime;

use crate::{
    data::PreparedDataSet,
    error::NetResult,
    func::CompletionFn,
    stats::Stats,
    train::Trainer,
};

/// Runs full epochs until `completion_fn` fires. Returns the last epoch's
/// error stats and the number of epochs run.
pub fn train_backprop_single_threaded(
    trainer: &mut Trainer,
    data_set: &PreparedDataSet,
    completion_fn: CompletionFn,
) -> NetResult<(Stats, usize)> {

    let stage_start_time = SystemTime::now();
    let mut epoch = 0;
    let mut error_stats = Stats::new();

    while !completion_fn.should_stop_training(epoch, stage_start_time, &error_stats) {
        error_stats = trainer.train_epoch(data_set)?;
        epoch += 1;
        log::debug!("epoch {}: mean error {}", epoch, error_stats.mean());
    }

    Ok((error_stats, epoch))

}

#[cfg(test)]
mod test {
    use super::*;
    use crate::func::ActivationFn;
    use crate::net::NetConfig;
    use crate::train::TrainerOptions;

    fn and_data() -> PreparedDataSet {
        PreparedDataSet::from_pairs(vec![
            ([0.0, 0.0], [0.0]),
            ([1.0, 0.0], [0.0]),
            ([0.0, 1.0], [0.0]),
            ([1.0, 1.0], [1.0]),
        ]).unwrap()
    }

    #[test]
    fn test_stops_after_epoch_limit() {
        let net = NetConfig::new_fully_connected(2, 1, [2], ActivationFn::Tanh)
            .create_net()
            .unwrap();
        let mut trainer = Trainer::new(net, TrainerOptions::default());
        let (stats, epochs) = train_backprop_single_threaded(
            &mut trainer,
            &and_data(),
            CompletionFn::stop_after_epoch(5)
        ).unwrap();
        assert_eq!(epochs, 5);
        assert_eq!(stats.count(), 4);
    }

    #[test]
    fn test_zero_epochs() {
        let net = NetConfig::new_fully_connected(2, 1, [2], ActivationFn::Tanh)
            .create_net()
            .unwrap();
        let mut trainer = Trainer::new(net, TrainerOptions::default());
        let before = trainer.net().clone();
        let (stats, epochs) = train_backprop_single_threaded(
            &mut trainer,
            &and_data(),
            CompletionFn::stop_after_epoch(0)
        ).unwrap();
        assert_eq!(epochs, 0);
        assert_eq!(stats.count(), 0);
        assert_eq!(trainer.net(), &before);
    }

}
