use crate::{
    data::PreparedDataSet,
    error::{check_len, NetResult},
    net::Net,
    stats::Stats,
    utils::square_f64,
};

/// `sqrt(sum((expected - actual)^2) / n)`.
pub(crate) fn root_mean_square_error(expected: &[f64], actual: &[f64]) -> f64 {
    debug_assert_eq!(expected.len(), actual.len());
    let sum: f64 = expected.iter()
        .zip(actual)
        .map(|(e, a)| square_f64(e - a))
        .sum();
    (sum / actual.len() as f64).sqrt()
}

pub fn forward_pass_and_compute_error(
    net: &mut Net,
    inputs: &[f64],
    expected_outputs: &[f64],
) -> NetResult<f64> {
    check_len("expected", net.outputs(), expected_outputs.len())?;
    net.forward_in_place(inputs)?;
    Ok(root_mean_square_error(expected_outputs, net.last_layer().units_slice()))
}

pub fn compute_error_for_batch(
    net: &mut Net,
    data: &PreparedDataSet,
) -> NetResult<Stats> {
    let mut error_stats = Stats::new();
    for (inputs, expected_outputs) in data {
        error_stats.report(forward_pass_and_compute_error(net, inputs, expected_outputs)?);
    }
    Ok(error_stats)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::NetError;
    use crate::func::ActivationFn;
    use crate::layer::LayerConfig;

    #[test]
    fn test_root_mean_square_error() {
        assert_eq!(root_mean_square_error(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
        assert_eq!(root_mean_square_error(&[0.0, 0.0], &[3.0, 4.0]), (25.0f64 / 2.0).sqrt());
        assert_eq!(root_mean_square_error(&[1.0], &[-1.0]), 2.0);
    }

    #[test]
    fn test_batch_error() {
        // zero weights: every output is identity(0) = 0
        let mut net = Net::new(vec![
            LayerConfig::input(1),
            LayerConfig::new(2, ActivationFn::Identity),
        ]).unwrap();
        let data = PreparedDataSet::from_pairs(vec![
            ([1.0], [3.0, 4.0]),
            ([2.0], [0.0, 0.0]),
        ]).unwrap();
        let stats = compute_error_for_batch(&mut net, &data).unwrap();
        assert_eq!(stats.count(), 2);
        assert_eq!(stats.max(), (12.5f64).sqrt());
        assert_eq!(stats.min(), 0.0);
    }

    #[test]
    fn test_expected_shape_checked() {
        let mut net = Net::new(vec![
            LayerConfig::input(1),
            LayerConfig::new(2, ActivationFn::Identity),
        ]).unwrap();
        assert!(forward_pass_and_compute_error(&mut net, &[1.0], &[1.0]).is_err());
        assert!(forward_pass_and_compute_error(&mut net, &[1.0, 2.0], &[1.0, 1.0]).is_err());
        // the expected length is checked, never truncated or averaged over zero
        match forward_pass_and_compute_error(&mut net, &[1.0], &[]) {
            Err(NetError::ShapeMismatch("expected", 2, 0)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        match forward_pass_and_compute_error(&mut net, &[1.0], &[1.0, 2.0, 3.0]) {
            Err(NetError::ShapeMismatch("expected", 2, 3)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(forward_pass_and_compute_error(&mut net, &[1.0], &[3.0, 4.0]).unwrap(), (12.5f64).sqrt());
    }

}
