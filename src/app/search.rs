use crate::App;
use picganize::logic::search::filter_items;

impl App {
    pub fn start_search(&mut self) {
        self.model.ui.search_mode = true;
    }

    /// Leave input mode, keeping the query as the active filter.
    pub fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
    }

    /// Leave input mode and drop the filter entirely.
    pub fn cancel_search(&mut self) {
        self.model.ui.search_mode = false;
        self.model.ui.search_query.clear();
        self.model.navigation.reset_to_top();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.model.ui.search_query.push(c);
        self.model.navigation.reset_to_top();
    }

    pub fn pop_search_char(&mut self) {
        self.model.ui.search_query.pop();
        self.model.navigation.reset_to_top();
    }

    /// Number of items matching the current query.
    pub fn search_match_count(&self) -> usize {
        filter_items(&self.model.catalog.items, &self.model.ui.search_query).len()
    }
}
