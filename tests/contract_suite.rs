//! End-to-end contract behavior exercised through the typed bindings:
//! event creation, minting, transfers, resale, and validation.

#![allow(clippy::panic)]

use std::sync::Arc;

use ticketplace_gateway::chain::{
    Address, ChainNode, Marketplace, TicketNft, units,
};

const TICKET_PRICE_ETH: &str = "0.1";
const RESALE_PRICE_ETH: &str = "0.2";
const MAX_TICKETS: u64 = 100;
const METADATA_URI: &str = "cid/test.json";

struct Deployment {
    node: Arc<ChainNode>,
    host: Address,
    buyer: Address,
    validator: Address,
    event_id: u64,
    nft_address: Address,
}

/// Deploys the marketplace, funds three accounts, and registers one event.
async fn deploy() -> Deployment {
    let node = Arc::new(ChainNode::new());
    let Ok(funding) = units::parse_ether("100") else {
        panic!("bad funding amount");
    };
    let host = node.create_account(funding).await;
    let buyer = node.create_account(funding).await;
    let validator = node.create_account(funding).await;

    let Ok(wallet) = node.connect(host).await else {
        panic!("host connect failed");
    };
    let Ok(price) = units::parse_ether(TICKET_PRICE_ETH) else {
        panic!("bad ticket price");
    };
    let marketplace =
        Marketplace::attach(Arc::clone(&node), node.marketplace_address()).connect(&wallet);
    let Ok(tx) = marketplace
        .create_event(
            "Concert XYZ",
            "An amazing concert",
            price,
            MAX_TICKETS,
            "https://gateway.test/ipfs/Qmimage",
            "Doors open at 7pm",
        )
        .await
    else {
        panic!("create_event submit failed");
    };
    let Ok(((event_id, nft_address), _receipt)) = tx.wait().await else {
        panic!("create_event confirmation failed");
    };

    Deployment {
        node,
        host,
        buyer,
        validator,
        event_id,
        nft_address,
    }
}

async fn mint_to(deployment: &Deployment, recipient: Address) -> u64 {
    let Ok(wallet) = deployment.node.connect(deployment.host).await else {
        panic!("host connect failed");
    };
    let nft =
        TicketNft::attach(Arc::clone(&deployment.node), deployment.nft_address).connect(&wallet);
    let Ok(tx) = nft.mint_ticket(recipient, METADATA_URI).await else {
        panic!("mint submit failed");
    };
    let Ok((token_id, _receipt)) = tx.wait().await else {
        panic!("mint confirmation failed");
    };
    token_id
}

#[tokio::test]
async fn created_event_reports_registered_fields() {
    let deployment = deploy().await;
    let marketplace = Marketplace::attach(
        Arc::clone(&deployment.node),
        deployment.node.marketplace_address(),
    );

    let Ok(count) = marketplace.event_counter().await else {
        panic!("event_counter failed");
    };
    assert_eq!(count, 1);

    let Ok(event) = marketplace.events(deployment.event_id).await else {
        panic!("events read failed");
    };
    let Ok(expected_price) = units::parse_ether(TICKET_PRICE_ETH) else {
        panic!("bad ticket price");
    };
    assert_eq!(event.name, "Concert XYZ");
    assert_eq!(event.description, "An amazing concert");
    assert_eq!(event.ticket_price, expected_price);
    assert_eq!(event.max_tickets, MAX_TICKETS);
    assert_eq!(event.ticket_nft_address, deployment.nft_address);
}

#[tokio::test]
async fn minting_assigns_token_and_metadata_locator() {
    let deployment = deploy().await;
    let token_id = mint_to(&deployment, deployment.buyer).await;
    assert_eq!(token_id, 0);

    let nft = TicketNft::attach(Arc::clone(&deployment.node), deployment.nft_address);
    let Ok(balance) = nft.balance_of(deployment.buyer).await else {
        panic!("balance_of failed");
    };
    assert_eq!(balance, 1);

    let Ok(uri) = nft.token_uri(token_id).await else {
        panic!("token_uri failed");
    };
    assert_eq!(uri, METADATA_URI);
}

#[tokio::test]
async fn owner_can_transfer_a_ticket() {
    let deployment = deploy().await;
    let token_id = mint_to(&deployment, deployment.buyer).await;

    let Ok(buyer_wallet) = deployment.node.connect(deployment.buyer).await else {
        panic!("buyer connect failed");
    };
    let nft = TicketNft::attach(Arc::clone(&deployment.node), deployment.nft_address)
        .connect(&buyer_wallet);
    let Ok(tx) = nft
        .transfer_from(deployment.buyer, deployment.validator, token_id)
        .await
    else {
        panic!("transfer submit failed");
    };
    assert!(tx.wait().await.is_ok());

    let Ok(owner) = nft.owner_of(token_id).await else {
        panic!("owner_of failed");
    };
    assert_eq!(owner, deployment.validator);

    let Ok(buyer_balance) = nft.balance_of(deployment.buyer).await else {
        panic!("balance_of failed");
    };
    let Ok(validator_balance) = nft.balance_of(deployment.validator).await else {
        panic!("balance_of failed");
    };
    assert_eq!(buyer_balance, 0);
    assert_eq!(validator_balance, 1);
}

#[tokio::test]
async fn resale_listing_and_purchase_settle() {
    let deployment = deploy().await;
    let token_id = mint_to(&deployment, deployment.buyer).await;
    let marketplace_address = deployment.node.marketplace_address();

    // Seller approves the marketplace and lists at the resale price.
    let Ok(seller_wallet) = deployment.node.connect(deployment.buyer).await else {
        panic!("seller connect failed");
    };
    let nft = TicketNft::attach(Arc::clone(&deployment.node), deployment.nft_address)
        .connect(&seller_wallet);
    let Ok(tx) = nft.approve(marketplace_address, token_id).await else {
        panic!("approve submit failed");
    };
    assert!(tx.wait().await.is_ok());

    let Ok(resale_price) = units::parse_ether(RESALE_PRICE_ETH) else {
        panic!("bad resale price");
    };
    let marketplace = Marketplace::attach(Arc::clone(&deployment.node), marketplace_address)
        .connect(&seller_wallet);
    let Ok(tx) = marketplace
        .list_ticket(token_id, resale_price, deployment.nft_address)
        .await
    else {
        panic!("list submit failed");
    };
    assert!(tx.wait().await.is_ok());

    // Validator buys at the asking price.
    let Ok(seller_before) = deployment.node.account_balance(deployment.buyer).await else {
        panic!("balance read failed");
    };
    let Ok(buyer_wallet) = deployment.node.connect(deployment.validator).await else {
        panic!("buyer connect failed");
    };
    let marketplace = Marketplace::attach(Arc::clone(&deployment.node), marketplace_address)
        .connect(&buyer_wallet);
    let Ok(tx) = marketplace.buy_ticket(token_id, resale_price).await else {
        panic!("buy submit failed");
    };
    assert!(tx.wait().await.is_ok());

    let Ok(owner) = nft.owner_of(token_id).await else {
        panic!("owner_of failed");
    };
    assert_eq!(owner, deployment.validator);

    let Ok(listing) = marketplace.listings(token_id).await else {
        panic!("listings read failed");
    };
    assert!(listing.is_sold);
    assert_eq!(listing.seller, deployment.buyer);

    let Ok(seller_after) = deployment.node.account_balance(deployment.buyer).await else {
        panic!("balance read failed");
    };
    assert_eq!(seller_after, seller_before + resale_price);
}

#[tokio::test]
async fn validate_distinguishes_minted_tokens() {
    let deployment = deploy().await;
    let token_id = mint_to(&deployment, deployment.buyer).await;

    let marketplace = Marketplace::attach(
        Arc::clone(&deployment.node),
        deployment.node.marketplace_address(),
    );
    assert!(
        marketplace
            .validate_ticket(token_id, deployment.nft_address)
            .await
    );
    assert!(
        !marketplace
            .validate_ticket(999, deployment.nft_address)
            .await
    );
}
