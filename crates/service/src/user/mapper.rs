//! Field-by-field conversions between wire shapes and the domain entity.

use models::user as user_model;

use super::domain::{NewUser, User, UserPatch};
use super::dto::{UserCreateDto, UserDto, UserUpdateDto};

pub fn to_new_user(dto: UserCreateDto) -> NewUser {
    NewUser {
        email: dto.email,
        first_name: dto.first_name,
        last_name: dto.last_name,
        birth_date: dto.birth_date,
        address: dto.address,
        phone_number: dto.phone_number,
    }
}

pub fn to_patch(dto: UserUpdateDto) -> UserPatch {
    UserPatch {
        email: dto.email,
        first_name: dto.first_name,
        last_name: dto.last_name,
        birth_date: dto.birth_date,
        address: dto.address,
        phone_number: dto.phone_number,
    }
}

pub fn to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        birth_date: user.birth_date,
        address: user.address,
        phone_number: user.phone_number,
    }
}

pub(crate) fn from_model(m: user_model::Model) -> User {
    User {
        id: m.id,
        email: m.email,
        first_name: m.first_name,
        last_name: m.last_name,
        birth_date: m.birth_date,
        address: m.address,
        phone_number: m.phone_number,
    }
}

pub(crate) fn to_row(user: NewUser) -> user_model::NewRow {
    user_model::NewRow {
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        birth_date: user.birth_date,
        address: user.address,
        phone_number: user.phone_number,
    }
}
