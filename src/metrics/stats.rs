use std::time::Duration;

/// Arithmetic mean of `samples`, or `None` when there are none.
///
/// Sums whole nanoseconds so the result does not depend on summation order.
#[must_use]
pub fn mean_duration<I>(samples: I) -> Option<Duration>
where
    I: IntoIterator<Item = Duration>,
{
    let (total_nanos, count) = samples
        .into_iter()
        .fold((0u128, 0u128), |(total, count), sample| {
            (
                total.saturating_add(sample.as_nanos()),
                count.saturating_add(1),
            )
        });
    let mean = total_nanos.checked_div(count)?;
    Some(u64::try_from(mean).map_or(Duration::MAX, Duration::from_nanos))
}
