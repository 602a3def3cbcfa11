use std::sync::Arc;

use tokio::sync::Mutex;
use xover::{
    transport::{mock::MockRam, SharedRam},
    Client, Crossover,
};
use xover_protocol::{device::twoway, FilterDesign};

pub fn mock_ram() -> Arc<Mutex<MockRam>> {
    Arc::new(Mutex::new(MockRam::default()))
}

pub fn crossover_on(ram: &Arc<Mutex<MockRam>>, design: FilterDesign) -> Crossover<'static> {
    let shared: SharedRam = ram.clone();
    Crossover::new(Client::new(shared), &twoway::DEVICE).with_design(design)
}

#[allow(dead_code)]
pub async fn snapshot(ram: &Arc<Mutex<MockRam>>) -> Vec<u8> {
    ram.lock().await.snapshot()
}
