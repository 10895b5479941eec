mod get_loan;
mod get_position;
mod init_asset;
mod originate_loan;
mod update_price;
