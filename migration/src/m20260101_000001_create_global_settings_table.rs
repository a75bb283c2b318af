use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GlobalSettings::Table)
                    .if_not_exists()
                    .col(integer(GlobalSettings::Id).primary_key())
                    .col(text(GlobalSettings::GlobalNotice).default(""))
                    .col(text(GlobalSettings::CreditsPageNotice).default(""))
                    .col(text(GlobalSettings::TermsOfService).default(""))
                    .col(text(GlobalSettings::PrivacyPolicy).default(""))
                    .col(text(GlobalSettings::SocialMediaLinks).default("{}"))
                    .col(text(GlobalSettings::CreditPlans).default("[]"))
                    .col(text(GlobalSettings::ContactDetails).default("[]"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlobalSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GlobalSettings {
    Table,
    Id,
    GlobalNotice,
    CreditsPageNotice,
    TermsOfService,
    PrivacyPolicy,
    SocialMediaLinks,
    CreditPlans,
    ContactDetails,
}
