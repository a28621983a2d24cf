use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::SettingsData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PageContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageContents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PageContents::PageKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PageContents::Title).string().not_null())
                    .col(ColumnDef::new(PageContents::Content).text().not_null())
                    .col(ColumnDef::new(PageContents::MetaDescription).string().null())
                    .col(ColumnDef::new(PageContents::MetaKeywords).string().null())
                    .col(
                        ColumnDef::new(PageContents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeroSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroSections::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroSections::Title).string().not_null())
                    .col(ColumnDef::new(HeroSections::Subtitle).string().null())
                    .col(ColumnDef::new(HeroSections::ButtonText).string().null())
                    .col(ColumnDef::new(HeroSections::ButtonLink).string().null())
                    .col(ColumnDef::new(HeroSections::BackgroundImage).string().null())
                    .col(
                        ColumnDef::new(HeroSections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FooterLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FooterLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FooterLinks::Section).string().not_null())
                    .col(ColumnDef::new(FooterLinks::Title).string().not_null())
                    .col(ColumnDef::new(FooterLinks::Url).string().not_null())
                    .col(
                        ColumnDef::new(FooterLinks::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FooterLinks::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FooterLinks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPosts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(BlogPosts::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Excerpt).string().null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::ImageUrl).string().null())
                    .col(ColumnDef::new(BlogPosts::Author).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Category).string().null())
                    .col(ColumnDef::new(BlogPosts::Tags).json_binary().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::IsPublished)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(BlogPosts::MetaDescription).string().null())
                    .col(ColumnDef::new(BlogPosts::MetaKeywords).string().null())
                    .col(
                        ColumnDef::new(BlogPosts::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MenuItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MenuItems::Title).string().not_null())
                    .col(ColumnDef::new(MenuItems::Url).string().not_null())
                    .col(ColumnDef::new(MenuItems::Icon).string().null())
                    .col(
                        ColumnDef::new(MenuItems::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MenuItems::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(MenuItems::ParentId).uuid().null())
                    .col(
                        ColumnDef::new(MenuItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MediaFiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MediaFiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MediaFiles::Filename).string().not_null())
                    .col(ColumnDef::new(MediaFiles::OriginalName).string().not_null())
                    .col(ColumnDef::new(MediaFiles::Url).string().not_null())
                    .col(ColumnDef::new(MediaFiles::FileType).string().not_null())
                    .col(ColumnDef::new(MediaFiles::MimeType).string().null())
                    .col(ColumnDef::new(MediaFiles::FileSize).big_integer().null())
                    .col(ColumnDef::new(MediaFiles::AltText).string().null())
                    .col(ColumnDef::new(MediaFiles::Title).string().null())
                    .col(
                        ColumnDef::new(MediaFiles::Folder)
                            .string()
                            .not_null()
                            .default("general"),
                    )
                    .col(
                        ColumnDef::new(MediaFiles::UploadedBy)
                            .string()
                            .not_null()
                            .default("admin"),
                    )
                    .col(
                        ColumnDef::new(MediaFiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_media_files_created_at")
                    .table(MediaFiles::Table)
                    .col(MediaFiles::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaFiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MenuItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FooterLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HeroSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PageContents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Id,
    SettingsData,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PageContents {
    Table,
    Id,
    PageKey,
    Title,
    Content,
    MetaDescription,
    MetaKeywords,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HeroSections {
    Table,
    Id,
    Title,
    Subtitle,
    ButtonText,
    ButtonLink,
    BackgroundImage,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FooterLinks {
    Table,
    Id,
    Section,
    Title,
    Url,
    SortOrder,
    IsActive,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Slug,
    Title,
    Excerpt,
    Content,
    ImageUrl,
    Author,
    Category,
    Tags,
    IsPublished,
    Views,
    MetaDescription,
    MetaKeywords,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    Id,
    Title,
    Url,
    Icon,
    SortOrder,
    IsActive,
    ParentId,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MediaFiles {
    Table,
    Id,
    Filename,
    OriginalName,
    Url,
    FileType,
    MimeType,
    FileSize,
    AltText,
    Title,
    Folder,
    UploadedBy,
    CreatedAt,
}
