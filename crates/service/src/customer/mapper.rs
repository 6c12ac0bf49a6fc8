use models::customer as customer_model;

use super::domain::{Customer, CustomerPatch, NewCustomer};
use super::dto::{CustomerCreateDto, CustomerDto, CustomerUpdateDto};

pub fn to_new_customer(dto: CustomerCreateDto) -> NewCustomer {
    NewCustomer { email: dto.email, full_name: dto.full_name, phone: dto.phone }
}

pub fn to_patch(dto: CustomerUpdateDto) -> CustomerPatch {
    CustomerPatch { full_name: dto.full_name, phone: dto.phone }
}

pub fn to_dto(c: Customer) -> CustomerDto {
    CustomerDto { id: c.id, email: c.email, full_name: c.full_name, phone: c.phone }
}

pub(crate) fn from_model(m: customer_model::Model) -> Customer {
    Customer { id: m.id, email: m.email, full_name: m.full_name, phone: m.phone }
}
