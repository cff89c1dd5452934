use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::data::preprocess::{normalize, Normalization};
use crate::data::window::{load_window, window_count, Cursor};
use crate::error::EngineError;
use crate::layers::pass::{compute_deltas, feed_forward};
use crate::layers::weights::WeightStore;
use crate::loss::squared::SquaredError;
use crate::network::spec::NetworkSpec;
use crate::optim::sgd::Sgd;
use crate::train::loop_fn::train_loop;
use crate::train::progress::ProgressSink;
use crate::train::train_config::TrainConfig;
use crate::train::window_stats::WindowStats;

/// The model has a single output unit.
pub const OUTPUT_SIZE: usize = 1;

/// A one-hidden-layer perceptron over a windowed numeric sequence.
///
/// All state (weights, activations, deltas, cursor) is owned by the value and
/// mutated through `&mut self`, so at most one `train` or `run` can be in
/// flight per instance. Wrap it in a `Mutex` to share it across threads.
#[derive(Debug)]
pub struct Network {
    input: Vec<f64>,
    input_size: usize,
    hidden_size: usize,

    features: Vec<f64>,
    fresh_inputs: usize,
    hidden: Vec<f64>,
    output: Vec<f64>,
    target: Vec<f64>,

    weights: WeightStore,
    delta0: Vec<f64>,
    delta1: Vec<f64>,

    cursor: Cursor,
    range: Normalization,
    optimizer: Sgd,
    training: TrainConfig,
}

impl Network {
    /// Builds an engine with the default spec: windows of 30, learning rate
    /// 0.2, weights from OS entropy.
    pub fn new(input: Vec<f64>) -> Result<Network, EngineError> {
        Network::from_spec(input, NetworkSpec::default())
    }

    /// Default spec with reproducible weight initialisation.
    pub fn seeded(input: Vec<f64>, seed: u64) -> Result<Network, EngineError> {
        let spec = NetworkSpec { seed: Some(seed), ..NetworkSpec::default() };
        Network::from_spec(input, spec)
    }

    pub fn from_spec(input: Vec<f64>, spec: NetworkSpec) -> Result<Network, EngineError> {
        let mut rng = match spec.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::with_rng(input, spec, &mut rng)
    }

    /// Normalises `input` and draws the initial weights from `rng`.
    ///
    /// Fails with `InvalidArgument` when `input` is shorter than one window
    /// and with `NumericDegeneracy` when every element is equal.
    pub fn with_rng<R: Rng + ?Sized>(
        mut input: Vec<f64>,
        spec: NetworkSpec,
        rng: &mut R,
    ) -> Result<Network, EngineError> {
        spec.validate()?;
        let input_size = spec.input_size;
        check_length(&input, input_size)?;

        let range = normalize(&mut input, input_size, spec.normalization)?;

        let hidden_size = (input_size + OUTPUT_SIZE) / 2;
        let weights = WeightStore::init(input_size, hidden_size, OUTPUT_SIZE, rng);

        tracing::debug!(
            total = input.len(),
            input_size,
            hidden_size,
            min = range.min,
            max = range.max,
            "network initialised"
        );

        Ok(Network {
            input,
            input_size,
            hidden_size,
            features: vec![0.0; input_size],
            fresh_inputs: 0,
            hidden: vec![0.0; hidden_size],
            output: vec![0.0; OUTPUT_SIZE],
            target: vec![0.0; OUTPUT_SIZE],
            weights,
            delta0: vec![0.0; hidden_size],
            delta1: vec![0.0; OUTPUT_SIZE],
            cursor: Cursor::default(),
            range,
            optimizer: Sgd::new(spec.learning_rate),
            training: spec.training,
        })
    }

    /// Replaces the input sequence wholesale.
    ///
    /// The new sequence is used as given: no normalisation, and the window
    /// width and hidden size stay as they were.
    pub fn set_input(&mut self, input: Vec<f64>) -> Result<(), EngineError> {
        check_length(&input, self.input_size)?;
        self.input = input;
        Ok(())
    }

    /// Trains every window towards `target` until its squared error is within
    /// tolerance, emitting `"Training Result <j> : <output>"` lines to `sink`.
    ///
    /// `target` must hold exactly one value. See `train_loop` for the
    /// termination rules.
    pub fn train<S: ProgressSink + ?Sized>(
        &mut self,
        target: &[f64],
        sink: &mut S,
    ) -> Result<Vec<WindowStats>, EngineError> {
        if target.len() != OUTPUT_SIZE {
            return Err(EngineError::invalid(format!(
                "target must have {OUTPUT_SIZE} value(s), got {}",
                target.len()
            )));
        }
        if let Some(bad) = target.iter().find(|t| !t.is_finite()) {
            return Err(EngineError::invalid(format!("target must be finite, got {bad}")));
        }
        self.target.copy_from_slice(target);
        self.cursor.reset();

        let config = self.training.clone();
        train_loop(self, &config, sink)
    }

    /// One forward pass per window, no learning. Emits
    /// `"Result <i> : <output>"` to `sink` and returns the outputs in window
    /// order.
    pub fn run<S: ProgressSink + ?Sized>(&mut self, sink: &mut S) -> Vec<f64> {
        self.cursor.reset();

        let windows = self.window_count();
        let mut results = Vec::with_capacity(windows);
        for i in 0..windows {
            self.feed_forward();
            let output = self.output();
            sink.display(&format!("Result {i} : {output}"));
            results.push(output);
            self.advance_cursor();
        }

        results
    }

    /// Forward pass over the window at the cursor. Returns how many features
    /// were read from the sequence; the rest of a short window reads as zero.
    pub fn feed_forward(&mut self) -> usize {
        self.fresh_inputs = load_window(&self.input, self.cursor.start(), &mut self.features);
        feed_forward(&self.weights, &self.features, &mut self.hidden, &mut self.output);
        self.fresh_inputs
    }

    /// Backward pass against the current target, using the activations of the
    /// last forward pass.
    pub(crate) fn feed_backwards(&mut self) {
        compute_deltas(
            &self.weights,
            &self.hidden,
            &self.output,
            &self.target,
            &mut self.delta0,
            &mut self.delta1,
        );
        self.optimizer.step(
            &mut self.weights,
            &self.features,
            &self.hidden,
            &self.delta0,
            &self.delta1,
        );
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor.advance(self.input_size);
    }

    /// Squared error of the last forward pass against the current target.
    pub fn calc_error(&self) -> f64 {
        SquaredError::loss(self.target[0], self.output[0])
    }

    pub fn output(&self) -> f64 {
        self.output[0]
    }

    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }

    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        OUTPUT_SIZE
    }

    pub fn total_size(&self) -> usize {
        self.input.len()
    }

    pub fn window_count(&self) -> usize {
        window_count(self.input.len(), self.input_size)
    }

    pub fn cursor(&self) -> usize {
        self.cursor.start()
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    /// Min and max seen by the constructor's normalisation scan.
    pub fn normalization(&self) -> Normalization {
        self.range
    }

    pub fn training_config(&self) -> &TrainConfig {
        &self.training
    }

    pub fn training_config_mut(&mut self) -> &mut TrainConfig {
        &mut self.training
    }
}

fn check_length(input: &[f64], input_size: usize) -> Result<(), EngineError> {
    if input.len() < input_size {
        return Err(EngineError::invalid(format!(
            "input has {} value(s), at least one window of {input_size} is required",
            input.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::progress::NullSink;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|x| x as f64).collect()
    }

    #[test]
    fn sizes_follow_window_width() {
        let net = Network::seeded(ramp(30), 1).unwrap();
        assert_eq!(net.input_size(), 30);
        assert_eq!(net.hidden_size(), 15);
        assert_eq!(net.output_size(), 1);
        assert_eq!(net.weights().synapse0.shape(), (30, 15));
        assert_eq!(net.weights().synapse1.shape(), (15, 1));
    }

    #[test]
    fn forward_is_repeatable() {
        let mut net = Network::seeded(ramp(30), 2).unwrap();
        net.feed_forward();
        let first = (net.output(), net.hidden().to_vec());
        net.feed_forward();
        assert_eq!(first, (net.output(), net.hidden().to_vec()));
    }

    #[test]
    fn backward_moves_output_towards_target() {
        let mut net = Network::seeded(ramp(30), 3).unwrap();
        net.target = vec![0.9];
        net.feed_forward();
        let before = net.calc_error();

        net.feed_backwards();
        net.feed_forward();

        assert!(net.calc_error() < before);
    }

    #[test]
    fn backward_never_touches_biases() {
        let mut net = Network::seeded(ramp(30), 4).unwrap();
        net.target = vec![0.1];
        for _ in 0..10 {
            net.feed_forward();
            net.feed_backwards();
        }
        assert_eq!((net.weights().bias0, net.weights().bias1), (0.0, 0.0));
    }

    #[test]
    fn rejects_short_input() {
        let err = Network::seeded(ramp(29), 5).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_wrong_target_length() {
        let mut net = Network::seeded(ramp(30), 6).unwrap();
        assert!(matches!(net.train(&[], &mut NullSink), Err(EngineError::InvalidArgument(_))));
        assert!(matches!(
            net.train(&[0.5, 0.5], &mut NullSink),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_input_keeps_sizes_and_skips_normalisation() {
        let mut net = Network::seeded(ramp(30), 7).unwrap();
        net.set_input(ramp(45)).unwrap();

        assert_eq!(net.total_size(), 45);
        assert_eq!(net.window_count(), 2);
        assert_eq!(net.hidden_size(), 15);
        assert_eq!(net.input()[29], 29.0);

        assert!(net.set_input(ramp(10)).is_err());
        assert_eq!(net.total_size(), 45);
    }

    #[test]
    fn cursor_ends_past_last_window() {
        let mut net = Network::seeded(ramp(45), 8).unwrap();
        net.run(&mut NullSink);
        assert_eq!(net.cursor(), 60);
    }
}
