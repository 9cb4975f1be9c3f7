use wm_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let username = std::env::args().nth(1).unwrap_or_else(|| "Tenno".to_string());
    info!("Fetching orders of {}", username);

    let client = Client::new(Config::new())?;
    let orders = client.get_orders_by_username(&username, None).await?;

    info!(
        "{} buy and {} sell orders",
        orders.buy_orders.len(),
        orders.sell_orders.len()
    );
    println!("{orders}");

    Ok(())
}
