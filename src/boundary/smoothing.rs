/// 3-tap smoothing kernel applied to the similarity series
pub const SMOOTHING_KERNEL: [f32; 3] = [0.25, 0.5, 0.25];

/// Convolve with [`SMOOTHING_KERNEL`], replicating edge values.
///
/// Series shorter than the kernel are returned unchanged.
pub fn smooth(values: &[f32]) -> Vec<f32> {
    let n = values.len();
    if n < SMOOTHING_KERNEL.len() {
        return values.to_vec();
    }

    let [left_w, mid_w, right_w] = SMOOTHING_KERNEL;
    (0..n)
        .map(|i| {
            let left = values[i.saturating_sub(1)];
            let right = values[(i + 1).min(n - 1)];
            left_w * left + mid_w * values[i] + right_w * right
        })
        .collect()
}

/// Population mean and standard deviation. Empty input yields `(0.0, 0.0)`.
pub fn mean_and_std(values: &[f32]) -> (f32, f32) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;

    (mean, variance.sqrt())
}

/// Standardize values; `epsilon` is added to sigma so flat series stay finite
pub fn z_scores(values: &[f32], epsilon: f32) -> Vec<f32> {
    let (mean, std) = mean_and_std(values);
    let sigma = std + epsilon;
    values.iter().map(|v| (v - mean) / sigma).collect()
}
