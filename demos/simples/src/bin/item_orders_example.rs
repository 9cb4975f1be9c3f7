use wm_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting item orders example");

    let client = Client::new(Config::new())?;
    let url_name = "ash_prime_set";

    match client
        .get_item_orders(url_name, Some(Platform::Pc), Some(IncludeOption::Item))
        .await?
    {
        ItemOrders::WithItem { orders, item } => {
            info!(
                "{} has {} parts in its set and {} open orders",
                item.item.en.item_name,
                item.items_in_set.len(),
                orders.len()
            );
            println!("{}", ItemOrders::WithItem { orders, item });
        }
        ItemOrders::Orders(orders) => info!("{} open orders", orders.len()),
    }

    let statistic = client.get_statistic(url_name, Some(Platform::Pc)).await?;
    if let Some(latest) = statistic.latest_closed() {
        info!(
            "Last closed hour: volume {}, median {} platinum",
            latest.volume, latest.median
        );
    }

    Ok(())
}
