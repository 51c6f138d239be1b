pub mod lomuto;
pub mod quick_sort;
