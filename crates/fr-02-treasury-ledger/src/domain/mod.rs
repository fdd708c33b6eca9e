pub mod subaccount;
