//! Mapper between the domain receipt model and its boundary DTO.

use crate::domain::models::receipt::Receipt as DomainReceipt;
use shared::Receipt as ReceiptDto;

/// Converts receipts between the domain representation and the shared DTO
pub struct ReceiptMapper;

impl ReceiptMapper {
    /// Convert a domain receipt into the DTO handed across the store boundary
    pub fn to_dto(receipt: DomainReceipt) -> ReceiptDto {
        ReceiptDto {
            id: receipt.id,
            timestamp: receipt.timestamp,
            amount: receipt.amount,
            image: receipt.image,
        }
    }

    /// Convert a boundary DTO back into the domain representation
    pub fn to_domain(dto: ReceiptDto) -> DomainReceipt {
        DomainReceipt {
            id: dto.id,
            timestamp: dto.timestamp,
            amount: dto.amount,
            image: dto.image,
        }
    }
}
