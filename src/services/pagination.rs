use serde::Serialize;

pub const DEFAULT_LIMIT: i64 = 5;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
	pub total_records: i64,
	pub first_page: i64,
	pub last_page: i64,
	pub page: i64,
	pub limit: i64,
}

/// Offset/limit math shared by every list operation. Pages are 1-based.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
	pub page: i64,
	pub limit: i64,
	pub offset: i64,
}

impl Paginator {
	pub fn new(page: Option<i64>, limit: Option<i64>) -> Paginator {
		let page = page.unwrap_or(1).max(1);
		let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
		Paginator {
			page,
			limit,
			offset: (page - 1) * limit,
		}
	}

	pub fn metadata(&self, total_records: i64) -> Metadata {
		let last_page = ((total_records + self.limit - 1) / self.limit).max(1);
		Metadata {
			total_records,
			first_page: 1,
			last_page,
			page: self.page,
			limit: self.limit,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_first_page_of_five() {
		let paginator = Paginator::new(None, None);
		assert_eq!(paginator.page, 1);
		assert_eq!(paginator.limit, 5);
		assert_eq!(paginator.offset, 0);
	}

	#[test]
	fn offset_follows_page() {
		let paginator = Paginator::new(Some(3), Some(10));
		assert_eq!(paginator.offset, 20);
	}

	#[test]
	fn zero_or_negative_inputs_are_clamped() {
		let paginator = Paginator::new(Some(0), Some(-4));
		assert_eq!(paginator.page, 1);
		assert_eq!(paginator.limit, 1);
		assert_eq!(paginator.offset, 0);
	}

	#[test]
	fn last_page_is_the_ceiling_of_total_over_limit() {
		assert_eq!(Paginator::new(Some(1), Some(5)).metadata(11).last_page, 3);
		assert_eq!(Paginator::new(Some(1), Some(5)).metadata(10).last_page, 2);
		assert_eq!(Paginator::new(Some(1), Some(5)).metadata(4).last_page, 1);
	}

	#[test]
	fn empty_result_still_reports_one_page() {
		let metadata = Paginator::new(None, None).metadata(0);
		assert_eq!(metadata.last_page, 1);
		assert_eq!(metadata.first_page, 1);
		assert_eq!(metadata.total_records, 0);
	}
}
