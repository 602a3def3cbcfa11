mod test_utils;

use assert_approx_eq::assert_approx_eq;
use test_utils::{crossover_on, mock_ram, snapshot};
use xover::{CutoffPair, XoverError};
use xover_protocol::FilterDesign;

// Round-trip error is bounded by the 5.23 quantization of A1, well
// under 0.05 Hz across the audible range.
const ROUNDTRIP_TOLERANCE: f64 = 0.05;

#[tokio::test]
async fn first_order_roundtrip() -> anyhow::Result<()> {
    let ram = mock_ram();
    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);

    for &(low, high) in &[(100.0, 1000.0), (30.0, 500.0), (500.0, 20_000.0)] {
        dsp.channel(0)?.set_cutoffs(low, high).await?;
        let cutoffs = dsp.channel(0)?.get_cutoffs().await?;
        assert_approx_eq!(cutoffs.low, low, ROUNDTRIP_TOLERANCE);
        assert_approx_eq!(cutoffs.high, high, ROUNDTRIP_TOLERANCE);
    }

    Ok(())
}

#[tokio::test]
async fn identical_writes_are_idempotent() -> anyhow::Result<()> {
    let ram = mock_ram();
    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);

    dsp.channel(0)?.set_cutoffs(100.0, 1000.0).await?;
    let first = snapshot(&ram).await;
    dsp.channel(0)?.set_cutoffs(100.0, 1000.0).await?;
    let second = snapshot(&ram).await;

    assert_ne!(first, vec![0u8; first.len()]);
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn channels_write_distinct_blocks() -> anyhow::Result<()> {
    let ram = mock_ram();
    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);

    dsp.channel(0)?.set_cutoffs(100.0, 1000.0).await?;
    let after_first = snapshot(&ram).await;
    dsp.channel(1)?.set_cutoffs(1000.0, 10_000.0).await?;
    let after_second = snapshot(&ram).await;

    // The second write lands past the first channel's 10-word block.
    assert_eq!(&after_first[..40], &after_second[..40]);
    assert_ne!(&after_second[40..80], &[0u8; 40][..]);

    let cutoffs = dsp.channel(1)?.get_cutoffs().await?;
    assert_approx_eq!(cutoffs.low, 1000.0, ROUNDTRIP_TOLERANCE);
    assert_approx_eq!(cutoffs.high, 10_000.0, ROUNDTRIP_TOLERANCE);
    Ok(())
}

#[tokio::test]
async fn cleared_block_reads_as_unavailable() -> anyhow::Result<()> {
    let ram = mock_ram();
    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);

    // Nothing was ever written; A1 decodes to zero.
    let cutoffs = dsp.channel(0)?.get_cutoffs().await?;
    assert_eq!(cutoffs, CutoffPair::UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn butterworth_blocks_differ_from_first_order() -> anyhow::Result<()> {
    let ram = mock_ram();

    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);
    dsp.channel(0)?.set_cutoffs(100.0, 1000.0).await?;
    let first_order = snapshot(&ram).await;

    let dsp = crossover_on(&ram, FilterDesign::Butterworth);
    dsp.channel(0)?.set_cutoffs(100.0, 1000.0).await?;
    let butterworth = snapshot(&ram).await;

    assert_ne!(first_order, butterworth);
    Ok(())
}

#[tokio::test]
async fn out_of_range_channel() {
    let ram = mock_ram();
    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);

    assert!(matches!(dsp.channel(2), Err(XoverError::OutOfRange)));
}

#[tokio::test]
async fn device_errors_surface() -> anyhow::Result<()> {
    let ram = mock_ram();
    let dsp = crossover_on(&ram, FilterDesign::FirstOrder);

    ram.lock().await.fail_reads = true;
    assert!(matches!(
        dsp.channel(0)?.get_cutoffs().await,
        Err(XoverError::DeviceIo(_))
    ));

    ram.lock().await.fail_writes = true;
    assert!(matches!(
        dsp.channel(0)?.set_cutoffs(100.0, 1000.0).await,
        Err(XoverError::DeviceIo(_))
    ));
    Ok(())
}
