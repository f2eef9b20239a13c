pub mod api;
pub mod ui;

use contracts::system::users::User;

use crate::shared::data_table::TableRecord;

impl TableRecord for User {
    fn record_id(&self) -> String {
        self.id.clone()
    }
}
